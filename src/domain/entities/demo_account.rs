//! Built-in accounts offered for one-key sign-in.

use super::Credentials;

/// Demo account shown under the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    /// Button caption.
    pub name: &'static str,
    /// Account email.
    pub email: &'static str,
    /// Account password.
    pub password: &'static str,
}

impl DemoAccount {
    /// Returns credentials for this account.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email, self.password)
    }
}

/// Accounts seeded into the local identity provider.
pub const DEMO_ACCOUNTS: [DemoAccount; 5] = [
    DemoAccount {
        name: "Admin",
        email: "admin@admin.com",
        password: "111111",
    },
    DemoAccount {
        name: "Invitado",
        email: "invitado@invitado.com",
        password: "222222",
    },
    DemoAccount {
        name: "Usuario",
        email: "usuario@usuario.com",
        password: "333333",
    },
    DemoAccount {
        name: "Anonimo",
        email: "anonimo@anonimo.com",
        password: "444444",
    },
    DemoAccount {
        name: "Tester",
        email: "tester@tester.com",
        password: "555555",
    },
];
