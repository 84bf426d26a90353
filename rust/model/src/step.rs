// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Low-level ISO-10303-21 (STEP physical file) writing.
//!
//! Instance ids auto-increment in insertion order within one file, which is
//! why a document must be built by a single owner and never shared across
//! requests.

use std::fmt;

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Reference to one instance record (`#12`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepId(pub u32);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An in-progress STEP file: a flat list of instance records.
#[derive(Debug)]
pub struct StepFile {
    next_id: u32,
    records: Vec<String>,
}

impl Default for StepFile {
    fn default() -> Self {
        Self::new()
    }
}

impl StepFile {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }

    /// Append one instance record and return its id. `body` is the record
    /// without the leading `#id=` and trailing `;`, e.g.
    /// `IFCDIRECTION((0.,0.,1.))`.
    pub fn add(&mut self, body: String) -> StepId {
        let id = StepId(self.next_id);
        self.next_id += 1;
        self.records.push(format!("#{}={};", id.0, body));
        id
    }

    /// Serialize the complete file: header sections plus all records.
    pub fn serialize(&self, file_name: &str) -> String {
        let timestamp = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default();

        let mut out = String::with_capacity(self.records.len() * 64 + 512);
        out.push_str("ISO-10303-21;\n");
        out.push_str("HEADER;\n");
        out.push_str("FILE_DESCRIPTION(('ViewDefinition [ModelView]'),'2;1');\n");
        out.push_str(&format!(
            "FILE_NAME({},{},(''),(''),{},'spacegen','');\n",
            text(file_name),
            text(&timestamp),
            text(concat!("spacegen-model ", env!("CARGO_PKG_VERSION"))),
        ));
        out.push_str("FILE_SCHEMA(('IFC4'));\n");
        out.push_str("ENDSEC;\n");
        out.push_str("DATA;\n");
        for record in &self.records {
            out.push_str(record);
            out.push('\n');
        }
        out.push_str("ENDSEC;\n");
        out.push_str("END-ISO-10303-21;\n");
        out
    }
}

/// Format a real. STEP requires every real literal to carry a decimal point.
pub fn real(v: f64) -> String {
    if v == v.trunc() && v.is_finite() && v.abs() < 1e15 {
        format!("{:.0}.", v)
    } else {
        format!("{v}")
    }
}

/// Format a coordinate list: `(0.,0.,3.)`.
pub fn coords(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| real(*v)).collect();
    format!("({})", parts.join(","))
}

/// Format a string literal, doubling embedded apostrophes.
pub fn text(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Format a reference list: `(#4,#7)`.
pub fn refs(ids: &[StepId]) -> String {
    let parts: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    format!("({})", parts.join(","))
}
