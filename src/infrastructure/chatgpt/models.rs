//! Selectable ChatGPT models for administrative option lists

use serde::Serialize;

/// A selectable model: identifier sent to the API and a display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const MODEL_OPTIONS: &[ModelOption] = &[
    ModelOption {
        value: "gpt-4o",
        label: "GPT-4o",
    },
    ModelOption {
        value: "gpt-4o-mini",
        label: "GPT-4o Mini",
    },
    ModelOption {
        value: "gpt-4-turbo",
        label: "GPT-4 Turbo",
    },
    ModelOption {
        value: "gpt-4",
        label: "GPT-4",
    },
    ModelOption {
        value: "gpt-3.5-turbo",
        label: "GPT-3.5 Turbo",
    },
];

pub fn model_options() -> &'static [ModelOption] {
    MODEL_OPTIONS
}

pub fn is_known_model(value: &str) -> bool {
    MODEL_OPTIONS.iter().any(|opt| opt.value == value)
}

pub fn label_for(value: &str) -> Option<&'static str> {
    MODEL_OPTIONS
        .iter()
        .find(|opt| opt.value == value)
        .map(|opt| opt.label)
}
