use log::warn;
use minijinja::Environment;
use regex::Regex;

use cruet::{
    case::{
        camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
        screaming_snake::to_screaming_snake_case, snake::to_snake_case,
        train::to_train_case,
    },
    string::{pluralize::to_plural, singularize::to_singular},
};

/// Registers the code-generation filters on top of the minijinja builtins.
pub fn register(env: &mut Environment<'static>) {
    env.add_filter("camel_case", to_camel_case);
    env.add_filter("kebab_case", to_kebab_case);
    env.add_filter("pascal_case", to_pascal_case);
    env.add_filter("screaming_snake_case", to_screaming_snake_case);
    env.add_filter("snake_case", to_snake_case);
    env.add_filter("train_case", to_train_case);
    env.add_filter("plural", to_plural);
    env.add_filter("singular", to_singular);
    env.add_filter("regex", regex_filter);
    env.add_filter("regex_replace", regex_replace_filter);
}

/// `{{ value | regex('^v\\d+') }}`: whether `val` matches the pattern.
/// An invalid pattern never matches.
pub fn regex_filter(val: &str, re: &str) -> bool {
    match Regex::new(re) {
        Ok(re) => re.is_match(val),
        Err(err) => {
            warn!("Invalid regex '{re}': {err}");
            false
        }
    }
}

/// `{{ value | regex_replace('-+', '_') }}`: replaces every match. An
/// invalid pattern leaves `val` untouched.
pub fn regex_replace_filter(val: &str, re: &str, replacement: &str) -> String {
    match Regex::new(re) {
        Ok(re) => re.replace_all(val, replacement).into_owned(),
        Err(err) => {
            warn!("Invalid regex '{re}': {err}");
            val.to_string()
        }
    }
}
