use derivative::Derivative;

/// A struct to hold the credentials sent in the `username` and `password` headers.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct UsedCredentials {
    pub username: Option<String>,
    #[derivative(Debug(format_with = "crate::utils::mask_fmt"))]
    pub password: Option<String>,
}
