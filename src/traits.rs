pub trait CredentialsProvider {
    /// Checks the used credentials against the configured pair.
    ///
    /// Missing values never match.
    fn authenticate(&self, username: Option<&str>, password: Option<&str>) -> bool;
}
