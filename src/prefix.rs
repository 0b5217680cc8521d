//! Longest common prefixes.

/// Returns the longest prefix shared by every string in `strings`.
///
/// The comparison is per `char`, so the result never splits a multi-byte
/// character. An empty input, or inputs without a common first character,
/// yield an empty string.
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::prefix::common_prefix;
///
/// assert_eq!(common_prefix(["interstellar", "internet", "interval"]), "inter");
/// assert_eq!(common_prefix(["dog", "racecar"]), "");
/// assert_eq!(common_prefix(Vec::<String>::new()), "");
/// ```
#[must_use]
pub fn common_prefix<I, S>(strings: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut strings = strings.into_iter();
    let Some(first) = strings.next() else {
        return String::new();
    };
    let first = first.as_ref();

    let length = strings.fold(first.len(), |length, other| {
        shared_length(&first[..length], other.as_ref())
    });
    first[..length].to_string()
}

/// Byte length of the common prefix of `left` and `right`, on a char boundary.
fn shared_length(left: &str, right: &str) -> usize {
    left.char_indices()
        .zip(right.chars())
        .find(|((_, left_char), right_char)| left_char != right_char)
        .map_or_else(|| left.len().min(right.len()), |((index, _), _)| index)
}

/// Returns the longest prefix shared by every slice in `sequences`.
///
/// ```rust
/// use lambars_idioms::prefix::common_prefix_slice;
///
/// let paths: [&[&str]; 3] = [
///     &["usr", "local", "bin"],
///     &["usr", "local", "lib"],
///     &["usr", "share"],
/// ];
/// assert_eq!(common_prefix_slice(&paths), ["usr"]);
/// ```
#[must_use]
pub fn common_prefix_slice<'a, T: PartialEq>(sequences: &[&'a [T]]) -> &'a [T] {
    let Some((first, rest)) = sequences.split_first() else {
        return &[];
    };
    let length = rest.iter().fold(first.len(), |length, other| {
        first[..length]
            .iter()
            .zip(other.iter())
            .take_while(|(left, right)| left == right)
            .count()
    });
    &first[..length]
}
