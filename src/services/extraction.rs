//! Match extraction from sportsbook listing markup.
//!
//! Two phases, the second only when the first finds nothing:
//!
//! 1. Row elements: every element carrying a known sportsbook class token,
//!    then every generic row-like element (`li`, `article`, ARIA rows), is
//!    read by [`Extractor::try_parse_match_row`]. Only class-token elements
//!    have their text nodes read as separate columns; generic rows are read
//!    as one run of text.
//! 2. Lines: the visible document text is scanned line by line for
//!    `"<a> vs <b>"`.
//!
//! Both phases keep the first record per [`MatchKey`](crate::domain::MatchKey).

use crate::domain::{ExtractionRules, MatchCandidate, MatchSet, ROW_SELECTOR};
use crate::error::{HarvestError, Result};
use crate::matcher::{
    clean_leading_name, clean_trailing_name, find_time, has_versus_separator, normalize_text,
    split_on_versus, split_pair, RoundMatcher, RowText,
};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};
use std::iter;
use tracing::debug;

/// Elements whose text never shows on the page.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Joins text nodes of a sportsbook row so each node stays its own column.
const COLUMN_SEPARATOR: &str = "  ";

/// Joins text nodes of a generic row into one run of text.
const TEXT_SEPARATOR: &str = " ";

static DEFAULT_EXTRACTOR: Lazy<Extractor> = Lazy::new(|| {
    Extractor::new(&ExtractionRules::default()).expect("built-in extraction rules are valid")
});

/// Extracts matches with the built-in rules.
pub fn extract(html: &str) -> Vec<MatchCandidate> {
    DEFAULT_EXTRACTOR.extract(html)
}

pub struct Extractor {
    class_selectors: Vec<Selector>,
    row_selector: Selector,
    rounds: RoundMatcher,
}

impl Extractor {
    pub fn new(rules: &ExtractionRules) -> Result<Self> {
        let class_selectors = rules
            .class_tokens
            .iter()
            .map(|token| token.trim())
            .filter(|token| !token.is_empty())
            .map(|token| {
                Selector::parse(&format!(".{}", token))
                    .map_err(|e| HarvestError::Selector(format!("class token {:?}: {}", token, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        let row_selector =
            Selector::parse(ROW_SELECTOR).map_err(|e| HarvestError::Selector(e.to_string()))?;

        Ok(Self {
            class_selectors,
            row_selector,
            rounds: RoundMatcher::new(&rules.round_keywords)?,
        })
    }

    /// Never fails: garbage in gives an empty list out.
    pub fn extract(&self, html: &str) -> Vec<MatchCandidate> {
        let document = Html::parse_document(html);

        let rows = self.scan_elements(&document);
        if !rows.is_empty() {
            debug!("Row elements yielded {} matches", rows.len());
            return rows.into_vec();
        }

        let rows = self.scan_lines(&document);
        debug!("Line scan yielded {} matches", rows.len());
        rows.into_vec()
    }

    fn scan_elements(&self, document: &Html) -> MatchSet {
        self.class_selectors
            .iter()
            .chain(iter::once(&self.row_selector))
            .flat_map(|selector| document.select(selector))
            .filter_map(|element| self.try_parse_match_row(element))
            .collect()
    }

    fn scan_lines(&self, document: &Html) -> MatchSet {
        let mut nodes = Vec::new();
        push_visible_text(document.root_element(), &mut nodes);

        nodes
            .iter()
            .flat_map(|node| node.lines())
            .filter_map(|line| self.parse_line(line))
            .collect()
    }

    /// Reads one element as a match row: two participants, plus the time
    /// and round label when the row shows them.
    pub fn try_parse_match_row(&self, element: ElementRef) -> Option<MatchCandidate> {
        let mut nodes = Vec::new();
        push_visible_text(element, &mut nodes);

        let separator = if self.is_sportsbook_row(element) {
            COLUMN_SEPARATOR
        } else {
            TEXT_SEPARATOR
        };
        let raw = nodes.join(separator);
        let normalized = normalize_text(&raw);
        if normalized.is_empty() {
            return None;
        }

        let row = RowText {
            raw: &raw,
            normalized: &normalized,
        };
        let (player_a, player_b) = split_pair(&row)?;

        MatchCandidate::new(
            find_time(&normalized),
            clean_leading_name(&player_a),
            clean_trailing_name(&player_b, &self.rounds),
            self.rounds.find(&normalized),
        )
    }

    fn is_sportsbook_row(&self, element: ElementRef) -> bool {
        self.class_selectors
            .iter()
            .any(|selector| selector.matches(&element))
    }

    /// Reads one free text line; only `"<a> vs <b>"` lines count and no
    /// round label is taken.
    pub fn parse_line(&self, line: &str) -> Option<MatchCandidate> {
        let line = normalize_text(line);
        if !has_versus_separator(&line) {
            return None;
        }

        let (player_a, player_b) = split_on_versus(&line)?;
        MatchCandidate::new(
            find_time(&line),
            clean_leading_name(&player_a),
            clean_trailing_name(&player_b, &self.rounds),
            None,
        )
    }
}

fn push_visible_text<'a>(element: ElementRef<'a>, out: &mut Vec<&'a str>) {
    if HIDDEN_ELEMENTS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let text: &'a str = text;
                let text = text.trim();
                if !text.is_empty() {
                    out.push(text);
                }
            }
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    push_visible_text(child, out);
                }
            }
            _ => {}
        }
    }
}
