//! Path patterns: static segments, `:name` parameters and the `*` catch-all.

use std::collections::BTreeMap;

use super::RouteTableError;

/// Parameters captured from `:name` segments.
pub type RouteParams = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// Parsed route path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    /// `None` for the catch-all.
    segments: Option<Vec<Segment>>,
}

impl PathPattern {
    pub const CATCH_ALL: &'static str = "*";

    pub fn parse(raw: &str) -> Result<Self, RouteTableError> {
        if raw == Self::CATCH_ALL {
            return Ok(Self {
                raw: raw.to_string(),
                segments: None,
            });
        }
        if !raw.starts_with('/') {
            return Err(RouteTableError::InvalidPattern {
                pattern: raw.to_string(),
                reason: "must start with '/'".to_string(),
            });
        }

        let mut segments = Vec::new();
        for part in split(raw) {
            let segment = match part.strip_prefix(':') {
                Some("") => {
                    return Err(RouteTableError::InvalidPattern {
                        pattern: raw.to_string(),
                        reason: "parameter without a name".to_string(),
                    })
                }
                Some(name) => Segment::Param(name.to_string()),
                None if part.contains('*') => {
                    return Err(RouteTableError::InvalidPattern {
                        pattern: raw.to_string(),
                        reason: "'*' is only valid as the whole pattern".to_string(),
                    })
                }
                None => Segment::Static(part.to_string()),
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments: Some(segments),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_catch_all(&self) -> bool {
        self.segments.is_none()
    }

    /// Match `path` (query and fragment ignored, trailing slash tolerated).
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let Some(segments) = &self.segments else {
            return Some(RouteParams::new());
        };

        let parts: Vec<&str> = split(strip_suffixes(path)).collect();
        if parts.len() != segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, part) in segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }
}

fn strip_suffixes(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|part| !part.is_empty())
}
