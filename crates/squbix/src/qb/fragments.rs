//! Variadic fragment input.

/// Anything that can be appended to a builder's fragment list.
///
/// Implemented for single strings and for arrays, vectors and slices of
/// strings, so adders take either one fragment or many:
///
/// ```
/// use squbix::qb::read_query;
///
/// let one = read_query("t").add_select("a").add_select("b");
/// let many = read_query("t").add_select(["a", "b"]);
/// assert_eq!(one.build_query(), many.build_query());
/// ```
pub trait IntoFragments {
    /// Append every fragment, in order, to `out`.
    fn append_to(self, out: &mut Vec<String>);
}

impl IntoFragments for &str {
    fn append_to(self, out: &mut Vec<String>) {
        out.push(self.to_string());
    }
}

impl IntoFragments for String {
    fn append_to(self, out: &mut Vec<String>) {
        out.push(self);
    }
}

impl IntoFragments for &String {
    fn append_to(self, out: &mut Vec<String>) {
        out.push(self.clone());
    }
}

impl<S: Into<String>, const N: usize> IntoFragments for [S; N] {
    fn append_to(self, out: &mut Vec<String>) {
        out.extend(self.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> IntoFragments for Vec<S> {
    fn append_to(self, out: &mut Vec<String>) {
        out.extend(self.into_iter().map(Into::into));
    }
}

impl<S: AsRef<str>> IntoFragments for &[S] {
    fn append_to(self, out: &mut Vec<String>) {
        out.extend(self.iter().map(|s| s.as_ref().to_string()));
    }
}

impl<S: AsRef<str>> IntoFragments for &Vec<S> {
    fn append_to(self, out: &mut Vec<String>) {
        self.as_slice().append_to(out);
    }
}
