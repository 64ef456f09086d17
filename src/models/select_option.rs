/// One `<select>` entry, resolved against the submitted form value.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

/// Resolve a catalog of allowed values against the current selection.
/// An empty current value (a cleared form) yields a selected blank
/// entry so the control renders empty instead of snapping back to the
/// first catalog value.
pub fn select_options(catalog: &[&str], current: &str) -> Vec<SelectOption> {
    let mut out = Vec::with_capacity(catalog.len() + 1);
    if current.is_empty() {
        out.push(SelectOption {
            value: String::new(),
            selected: true,
        });
    }
    for value in catalog {
        out.push(SelectOption {
            value: (*value).to_string(),
            selected: *value == current,
        });
    }
    out
}
