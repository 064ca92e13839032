use std::fmt;

use crate::types::Sequence;

/// Renders a sequence as `[a,b,c]`, or `[]` when empty.
pub struct Show<'a, S>(pub &'a S);

impl<S> fmt::Display for Show<'_, S>
where
    S: Sequence,
    S::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str("]")
    }
}

pub fn show_seq<S>(xs: &S) -> String
where
    S: Sequence,
    S::Item: fmt::Display,
{
    Show(xs).to_string()
}

/// `[[1,2],[3]]`
pub fn show_nested<O>(xxs: &O) -> String
where
    O: Sequence,
    O::Item: Sequence,
    <O::Item as Sequence>::Item: fmt::Display,
{
    let rows: Vec<String> = xxs.iter().map(show_seq).collect();
    format!("[{}]", rows.join(","))
}

/// The value itself, or `Nothing` when absent.
pub fn show_opt<T: fmt::Display>(x: &Option<T>) -> String {
    match x {
        Some(value) => value.to_string(),
        None => "Nothing".to_string(),
    }
}
