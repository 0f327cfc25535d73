//! Mode selector: radio option descriptors and the header toggle cursor.

use anyhow::{Result, ensure};

use crate::style::Style;

/// Everything needed to build one radio input + label for a style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub style: Style,
    pub id: String,
    pub group: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug)]
pub struct ModeSelector {
    styles: Vec<Style>,
    group: &'static str,
    cursor: usize,
}

impl ModeSelector {
    /// The toggle cycles through `styles` in this order. An empty list or an
    /// empty group name is a configuration error.
    pub fn new(styles: &[Style], group: &'static str) -> Result<Self> {
        ensure!(!styles.is_empty(), "mode selector needs at least one style");
        ensure!(!group.is_empty(), "option group name is empty");
        Ok(Self {
            styles: styles.to_vec(),
            group,
            cursor: 0,
        })
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn option_descriptors(&self) -> Vec<OptionDescriptor> {
        self.styles
            .iter()
            .map(|&style| OptionDescriptor {
                style,
                id: style.option_id(),
                group: self.group,
                value: style.name(),
                label: style.name(),
            })
            .collect()
    }

    /// Style for this activation of the toggle; the cursor advances exactly once.
    pub fn advance(&mut self) -> Style {
        let style = self.styles[self.cursor % self.styles.len()];
        self.cursor = (self.cursor + 1) % self.styles.len();
        style
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self {
            styles: Style::ALL.to_vec(),
            group: "times",
            cursor: 0,
        }
    }
}
