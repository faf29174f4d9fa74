use std::fmt;

use tracing_core::field::{Field, Visit};

use crate::details::Details;

/// Collects a `tracing` event's fields into [`Details`].
///
/// The conventional `message` field is pulled out separately so it can become
/// the record message instead of an extension field.
#[derive(Default)]
pub(crate) struct DetailsVisitor {
    pub(crate) message: Option<String>,
    pub(crate) details: Details,
}

impl Visit for DetailsVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.details.insert(field.name(), value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.details.insert(field.name(), value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.details.insert(field.name(), value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.details.insert(field.name(), value);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.details.insert(field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = Some(format!("{value:?}")),
            name if name.starts_with("r#") => {
                self.details.insert(&name[2..], format!("{value:?}"));
            },
            name => {
                self.details.insert(name, format!("{value:?}"));
            },
        }
    }
}
