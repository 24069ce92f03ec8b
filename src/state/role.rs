/// Which side of the marketplace the visitor is browsing as. Owned by the
/// app root and passed down as a prop; every role-conditioned section keys
/// its copy off this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    Customer,
    Builder,
}

impl UserRole {
    pub fn is_customer(self) -> bool {
        matches!(self, UserRole::Customer)
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Builder => "builder",
        }
    }
}
