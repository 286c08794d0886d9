// Column table input.
//
// Spreadsheet parsing happens upstream; we read the exported columns as JSON:
//
//   {"columns": [{"name": "Q1", "cells": ["texte", null, 42]}]}
//
// `null` is a missing cell. Numbers and booleans are rendered as text, the
// way a spreadsheet shows them.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::error::AnalysisError;
use crate::lexicon::corpus::Corpus;

#[derive(Debug, Deserialize)]
pub struct ColumnTable {
    pub columns: Vec<Column>,
}

#[derive(Debug, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default)]
    pub cells: Vec<Value>,
}

impl ColumnTable {
    /// Read a column table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid column table in {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Turn the selected columns into corpora, in selection order.
    ///
    /// `None` selects every column in file order. An explicit but empty
    /// selection, or a name not in the table, is invalid input.
    pub fn select(&self, selection: Option<&[String]>) -> Result<Vec<Corpus>, AnalysisError> {
        let names: Vec<&str> = match selection {
            None => self.column_names().collect(),
            Some([]) => {
                return Err(AnalysisError::InvalidInput(
                    "the column selection is empty".to_string(),
                ))
            }
            Some(names) => names.iter().map(String::as_str).collect(),
        };

        names
            .into_iter()
            .map(|name| {
                self.columns
                    .iter()
                    .find(|c| c.name == name)
                    .map(Column::to_corpus)
                    .ok_or_else(|| {
                        AnalysisError::InvalidInput(format!("unknown column '{name}'"))
                    })
            })
            .collect()
    }
}

impl Column {
    pub fn to_corpus(&self) -> Corpus {
        Corpus::new(self.name.clone(), self.cells.iter().map(cell_text).collect())
    }
}

/// Text of one cell, or `None` when the cell is missing.
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
