//! Comparison and logic helpers available to every template.
//!
//! The helper set mirrors what most Handlebars deployments expect:
//! `eq`, `ne`, `lt`, `gt`, `lte`, `gte`, and variadic `and`/`or`.
//! They are registered into the engine's own registry at construction,
//! not into any library-global state.
use std::cmp::Ordering;

use handlebars::{handlebars_helper, Handlebars};
use serde_json::Value as Json;

/// Truthiness as the template language defines it: `null`, `false`,
/// `0` and `""` are falsy, everything else is truthy.
pub(crate) fn truthy(value: &Json) -> bool {
    match value {
        Json::Null => false,
        Json::Bool(value) => *value,
        Json::Number(number) => number.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Json::String(string) => !string.is_empty(),
        Json::Array(_) | Json::Object(_) => true,
    }
}

/// Ordering for `lt`/`gt`/`lte`/`gte`. Only numbers and strings
/// are comparable; anything else compares as unordered, so the
/// helper evaluates to false.
fn compare(a: &Json, b: &Json) -> Option<Ordering> {
    match (a, b) {
        (Json::Number(a), Json::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Json::String(a), Json::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

handlebars_helper!(eq: |a: Json, b: Json| a == b);
handlebars_helper!(ne: |a: Json, b: Json| a != b);
handlebars_helper!(lt: |a: Json, b: Json| compare(a, b) == Some(Ordering::Less));
handlebars_helper!(gt: |a: Json, b: Json| compare(a, b) == Some(Ordering::Greater));
handlebars_helper!(lte: |a: Json, b: Json| matches!(compare(a, b), Some(Ordering::Less | Ordering::Equal)));
handlebars_helper!(gte: |a: Json, b: Json| matches!(compare(a, b), Some(Ordering::Greater | Ordering::Equal)));

// All arguments truthy. An empty call is vacuously true.
handlebars_helper!(and: |*args| args.iter().copied().all(truthy));

// At least one truthy argument.
handlebars_helper!(or: |*args| args.iter().copied().any(truthy));

pub(crate) fn register(registry: &mut Handlebars<'_>) {
    registry.register_helper("eq", Box::new(eq));
    registry.register_helper("ne", Box::new(ne));
    registry.register_helper("lt", Box::new(lt));
    registry.register_helper("gt", Box::new(gt));
    registry.register_helper("lte", Box::new(lte));
    registry.register_helper("gte", Box::new(gte));
    registry.register_helper("and", Box::new(and));
    registry.register_helper("or", Box::new(or));
}
