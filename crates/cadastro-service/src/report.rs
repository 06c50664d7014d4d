//! User report rendering.

use cadastro_core::{User, UserId, UserStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title printed at the top of every user report.
pub const REPORT_TITLE: &str = "Relatório de Usuários";

/// Line printed when there are no users to list.
pub const EMPTY_REPORT_LINE: &str = "Nenhum usuário cadastrado.";

/// Options controlling report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Append a totals line after the entries.
    #[serde(default = "default_include_summary")]
    pub include_summary: bool,
}

fn default_include_summary() -> bool {
    true
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_summary: default_include_summary(),
        }
    }
}

/// One report line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub is_admin: bool,
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Nome: {}, Email: {}, Status: {}",
            self.id, self.name, self.email, self.status
        )?;
        if self.is_admin {
            f.write_str(" [admin]")?;
        }
        Ok(())
    }
}

/// Structured user report; `Display` renders the text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserReport {
    pub entries: Vec<ReportEntry>,
    pub options: ReportOptions,
}

impl UserReport {
    /// Builds a report over `users`, keeping their order.
    #[must_use]
    pub fn new(users: &[User], options: ReportOptions) -> Self {
        Self {
            entries: users.iter().map(ReportEntry::from).collect(),
            options,
        }
    }

    /// Number of listed users.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Number of users with the given status.
    #[must_use]
    pub fn count_by_status(&self, status: UserStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }
}

impl fmt::Display for UserReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} ---", REPORT_TITLE)?;

        if self.entries.is_empty() {
            writeln!(f, "{}", EMPTY_REPORT_LINE)?;
        }
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }

        if self.options.include_summary {
            writeln!(
                f,
                "Total: {} (ativos: {}, inativos: {})",
                self.total(),
                self.count_by_status(UserStatus::Ativo),
                self.count_by_status(UserStatus::Inativo)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<User> {
        let alice = User::new("Alice".to_string(), "alice@email.com".to_string(), 28, false);
        let mut bob = User::new("Bob".to_string(), "bob@email.com".to_string(), 32, false);
        bob.deactivate().unwrap();
        let root = User::new("Root".to_string(), "root@email.com".to_string(), 45, true);
        vec![alice, bob, root]
    }

    #[test]
    fn test_report_lines() {
        let users = users();
        let text = UserReport::new(&users, ReportOptions::default()).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "--- Relatório de Usuários ---");
        assert_eq!(
            lines[1],
            format!("ID: {}, Nome: Alice, Email: alice@email.com, Status: ativo", users[0].id)
        );
        assert_eq!(
            lines[2],
            format!("ID: {}, Nome: Bob, Email: bob@email.com, Status: inativo", users[1].id)
        );
        assert!(lines[3].ends_with("Status: ativo [admin]"));
        assert_eq!(lines[4], "Total: 3 (ativos: 2, inativos: 1)");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_report_without_summary() {
        let users = users();
        let options = ReportOptions { include_summary: false };
        let text = UserReport::new(&users, options).to_string();
        assert!(!text.contains("Total:"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_empty_report() {
        let report = UserReport::new(&[], ReportOptions::default());
        let text = report.to_string();
        assert!(text.contains(REPORT_TITLE));
        assert!(text.contains(EMPTY_REPORT_LINE));
        assert!(text.contains("Total: 0 (ativos: 0, inativos: 0)"));
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn test_counts() {
        let report = UserReport::new(&users(), ReportOptions::default());
        assert_eq!(report.total(), 3);
        assert_eq!(report.count_by_status(UserStatus::Ativo), 2);
        assert_eq!(report.count_by_status(UserStatus::Inativo), 1);
    }
}
