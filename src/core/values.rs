use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_THRESHOLD: usize = 5;
pub const DEFAULT_COLLAPSE_TO: usize = 3;

/// Context for rendering an event payload value, collapsing long maps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuesView {
    pub is_dict: bool,
    pub is_list: bool,
    pub threshold: usize,
    pub collapse_to: usize,
    pub over_threshold: bool,
    pub hidden_values: usize,
    pub value_before_expand: Vec<(String, Value)>,
    pub value_after_expand: Vec<(String, Value)>,
    /// Set only for scalar values.
    pub value: Option<Value>,
}

pub fn render_values(value: &Value, threshold: usize, collapse_to: usize) -> ValuesView {
    let mut view = ValuesView {
        is_dict: false,
        is_list: false,
        threshold,
        collapse_to,
        over_threshold: false,
        hidden_values: 0,
        value_before_expand: Vec::new(),
        value_after_expand: Vec::new(),
        value: None,
    };

    let mut entries: Vec<(String, Value)> = match value {
        Value::Array(items) => {
            view.is_dict = true;
            view.is_list = !items.is_empty();
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v.clone()))
                .collect()
        }
        Value::Object(map) => {
            view.is_dict = true;
            map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
        }
        scalar => {
            view.value = Some(scalar.clone());
            return view;
        }
    };

    if matches!(value, Value::Object(_)) {
        entries.sort_by(|a, b| a.0.cmp(&b.0));
    }

    if entries.len() > threshold {
        let cut = collapse_to.min(entries.len());
        view.over_threshold = true;
        view.hidden_values = entries.len() - cut;
        view.value_after_expand = entries.split_off(cut);
    }
    view.value_before_expand = entries;
    view
}
