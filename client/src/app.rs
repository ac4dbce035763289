//! Page state and rendering.

use tracing::error;

use crate::api::ApiClient;
use crate::types::{CreateUser, User};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const FALLBACK_MESSAGE: &str = "Failed to connect to backend";

const TITLE: &str = "MERN App on Azure";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUserForm {
    pub name: String,
    pub email: String,
}

/// The single page of the client.
///
/// Holds what the page shows: the greeting, whether it is still loading, the
/// users last fetched and the new-user form. Network failures never escape;
/// they are logged and the page degrades.
#[derive(Debug)]
pub struct App {
    api: ApiClient,
    message: String,
    loading: bool,
    users: Vec<User>,
    form: NewUserForm,
}

impl App {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            message: String::new(),
            loading: true,
            users: Vec::new(),
            form: NewUserForm::default(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn form(&self) -> &NewUserForm {
        &self.form
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    /// Load the greeting and the user list. The two requests run concurrently.
    pub async fn mount(&mut self) {
        let (greeting, users) = tokio::join!(self.api.hello(), self.api.list_users());

        match greeting {
            Ok(greeting) => self.message = greeting.message,
            Err(e) => {
                error!(error = %e, "Failed to fetch greeting");
                self.message = FALLBACK_MESSAGE.to_string();
            }
        }
        self.loading = false;

        self.apply_users(users);
    }

    /// Post the form and, once it is accepted, reload the whole list.
    pub async fn submit(&mut self) {
        let new_user = CreateUser {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
        };

        match self.api.create_user(&new_user).await {
            Ok(_) => {
                self.form = NewUserForm::default();
                self.fetch_users().await;
            }
            Err(e) => error!(error = %e, "Failed to create user"),
        }
    }

    pub async fn fetch_users(&mut self) {
        let users = self.api.list_users().await;
        self.apply_users(users);
    }

    fn apply_users(&mut self, users: crate::Result<Vec<User>>) {
        match users {
            Ok(users) => self.users = users,
            Err(e) => error!(error = %e, "Failed to fetch users"),
        }
    }

    pub fn render(&self) -> String {
        let greeting = if self.loading {
            LOADING_MESSAGE
        } else {
            self.message.as_str()
        };

        let mut lines = vec![
            TITLE.to_string(),
            greeting.to_string(),
            String::new(),
            "Users".to_string(),
        ];
        if self.users.is_empty() {
            lines.push("  No users yet".to_string());
        }
        lines.extend(
            self.users
                .iter()
                .map(|user| format!("  {} ({})", user.name, user.email)),
        );
        lines.push(String::new());
        lines.push("Add user".to_string());
        lines.push(format!("  name:  {}", self.form.name));
        lines.push(format!("  email: {}", self.form.email));

        lines.join("\n")
    }
}
