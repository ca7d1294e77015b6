//! Extraction of the `--args` sub-list.

use super::field::FieldSpec;
use super::flags::ARGS_FLAG;

/// Returns the tokens between `--args` and the next dash-prefixed token.
///
/// Empty when `--args` is absent, is the last token, or is immediately
/// followed by another flag. Only the first `--args` is considered.
#[must_use]
pub fn argument_tokens<S: AsRef<str>>(tokens: &[S]) -> &[S] {
    let Some(position) = tokens.iter().position(|t| t.as_ref() == ARGS_FLAG) else {
        return &[];
    };
    let rest = &tokens[position + 1..];
    let end = rest
        .iter()
        .position(|t| t.as_ref().starts_with('-'))
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Parses the `--args` sub-list into field descriptors.
///
/// # Examples
///
/// ```
/// use graphql_alchemist::core::parse_arguments;
///
/// let fields = parse_arguments(&["-n", "user", "--args", "id:ID!", "-a"]);
/// assert_eq!(fields.len(), 1);
/// assert_eq!(fields[0].name(), "id");
/// ```
#[must_use]
pub fn parse_arguments<S: AsRef<str>>(tokens: &[S]) -> Vec<FieldSpec> {
    argument_tokens(tokens)
        .iter()
        .map(|t| FieldSpec::parse(t.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(tokens: &[&str]) -> Vec<(String, String)> {
        parse_arguments(tokens)
            .into_iter()
            .map(|f| (f.name().to_string(), f.field_type().to_string()))
            .collect()
    }

    #[test]
    fn sub_list_stops_at_next_flag() {
        let fields = pairs(&["-n", "greet", "--args", "foo:String", "bar:Int", "-p"]);
        assert_eq!(
            fields,
            vec![
                ("foo".to_string(), "String".to_string()),
                ("bar".to_string(), "Int".to_string()),
            ]
        );
    }

    #[test]
    fn sub_list_runs_to_end_of_input() {
        let fields = pairs(&["--args", "a:Int", "b:Float"]);
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn missing_args_flag_gives_empty_list() {
        assert!(parse_arguments(&["-n", "greet", "-a"]).is_empty());
    }

    #[test]
    fn args_as_last_token_gives_empty_list() {
        assert!(parse_arguments(&["-n", "greet", "--args"]).is_empty());
    }

    #[test]
    fn args_followed_by_flag_gives_empty_list() {
        assert!(parse_arguments(&["--args", "-p", "foo:String"]).is_empty());
        assert!(parse_arguments(&["--args", "--async"]).is_empty());
    }

    #[test]
    fn bare_token_has_empty_type() {
        assert_eq!(pairs(&["--args", "foo"]), vec![("foo".to_string(), String::new())]);
    }

    /// Commas are not separators; the token is kept whole.
    #[test]
    fn comma_is_part_of_the_type() {
        let fields = pairs(&["--args", "foo:String,bar:Int"]);
        assert_eq!(
            fields,
            vec![("foo".to_string(), "String,bar:Int".to_string())]
        );
    }

    #[test]
    fn only_first_args_flag_is_used() {
        let fields = pairs(&["--args", "a:Int", "-p", "--args", "b:Int"]);
        assert_eq!(fields, vec![("a".to_string(), "Int".to_string())]);
    }

    #[test]
    fn argument_tokens_borrow_the_input() {
        let tokens = vec!["--args".to_string(), "x:ID".to_string()];
        assert_eq!(argument_tokens(&tokens), &["x:ID".to_string()]);
    }
}
