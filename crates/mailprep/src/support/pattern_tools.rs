//! # Pattern Tools

/// A macro to concatenate multiple string literals with a specified separator.
///
/// # Examples
///
/// ```rust
/// use mailprep::join_strs;
///
/// let result = join_strs!(",", ("Hello", "World", "Rust"));
/// assert_eq!(result, "Hello,World,Rust");
///
/// let result = join_strs!(";", ("OnlyOne"));
/// assert_eq!(result, "OnlyOne");
/// ```
///
/// # Parameters
///
/// - `$sep`: A string literal used as a separator between the provided string literals.
/// - `($first $(, $rest)*)`: A tuple of at least one string literal.
#[macro_export]
macro_rules! join_strs {
    ($sep:literal, ($first:literal $(, $rest:literal)* $(,)?)) => {
        concat!($first $(, $sep, $rest)*)
    };
}

/// An extension of [`join_strs!()`] which uses "|" as the separator;
/// building a regex alternation from pattern fragments.
#[macro_export]
macro_rules! join_patterns {
    ($($e:expr),* $(,)?) => { $crate::join_strs!("|", ($($e),*)) };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_join_patterns() {
        assert_eq!(join_patterns!(r"n't\b", r"\.\.\.", "--"), r"n't\b|\.\.\.|--");
    }

    #[test]
    fn test_join_strs() {
        assert_eq!(join_strs!("+", ("a", "b", "c")), "a+b+c");
        assert_eq!(join_strs!("+", ("a")), "a");
    }
}
