use std::collections::HashMap;

use crate::config;
use crate::utils::parse_optional_u32;

/// One field per filter criterion, kept as raw text exactly as the
/// user submitted it. Numeric coercion happens in [`FilterForm::bounds`]
/// so an emptied box stays an empty string instead of becoming zero.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterForm {
    pub provider: String,
    pub region: String,
    pub currency: String,
    pub min_cpu: String,
    pub max_cpu: String,
    pub min_ram: String,
    pub max_ram: String,
}

/// The coerced numeric bounds sent upstream. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min_cpu: Option<u32>,
    pub max_cpu: Option<u32>,
    pub min_ram: Option<u32>,
    pub max_ram: Option<u32>,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self {
            provider: config::DEFAULT_PROVIDER.to_string(),
            region: config::DEFAULT_REGION.to_string(),
            currency: config::DEFAULT_CURRENCY.to_string(),
            min_cpu: String::new(),
            max_cpu: String::new(),
            min_ram: String::new(),
            max_ram: String::new(),
        }
    }
}

impl FilterForm {
    /// Read the form out of a request query map.
    ///
    /// A key absent from the query yields the field's initial default;
    /// a key present with an empty value stays the empty string. The
    /// distinction is what lets "clear filters" render an emptied form
    /// while a bare `/` renders the initial one.
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        let field = |name: &str, default: &str| {
            query
                .get(name)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            provider: field("provider", config::DEFAULT_PROVIDER),
            region: field("region", config::DEFAULT_REGION),
            currency: field("currency", config::DEFAULT_CURRENCY),
            min_cpu: field("min_cpu", ""),
            max_cpu: field("max_cpu", ""),
            min_ram: field("min_ram", ""),
            max_ram: field("max_ram", ""),
        }
    }

    /// The form with every criterion reset to the empty string. This is
    /// what the Clear control links to.
    pub fn cleared() -> Self {
        Self {
            provider: String::new(),
            region: String::new(),
            currency: String::new(),
            min_cpu: String::new(),
            max_cpu: String::new(),
            min_ram: String::new(),
            max_ram: String::new(),
        }
    }

    /// Coerce the numeric criteria. Empty, whitespace-only and
    /// unparseable input all mean "no bound".
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_cpu: parse_optional_u32(Some(self.min_cpu.as_str())),
            max_cpu: parse_optional_u32(Some(self.max_cpu.as_str())),
            min_ram: parse_optional_u32(Some(self.min_ram.as_str())),
            max_ram: parse_optional_u32(Some(self.max_ram.as_str())),
        }
    }

    /// Round-trip the submitted state into link query pairs so the
    /// expansion and clear links keep the active filter.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("provider".to_string(), self.provider.clone()),
            ("region".to_string(), self.region.clone()),
            ("currency".to_string(), self.currency.clone()),
            ("min_cpu".to_string(), self.min_cpu.clone()),
            ("max_cpu".to_string(), self.max_cpu.clone()),
            ("min_ram".to_string(), self.min_ram.clone()),
            ("max_ram".to_string(), self.max_ram.clone()),
        ]
    }
}
