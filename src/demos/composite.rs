//! Composite: managers own their subordinates; showing a manager shows the
//! whole subtree depth first.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Developer,
    Designer,
    Manager,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Developer => "Developer",
            Role::Designer => "Designer",
            Role::Manager => "Manager",
        })
    }
}

/// A node in the org chart. Leaves simply have no subordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    role: Role,
    name: String,
    position: String,
    subordinates: Vec<Employee>,
}

impl Employee {
    pub fn new(role: Role, name: impl Into<String>, position: impl Into<String>) -> Self {
        Self { role, name: name.into(), position: position.into(), subordinates: Vec::new() }
    }

    pub fn developer(name: &str, position: &str) -> Self {
        Self::new(Role::Developer, name, position)
    }

    pub fn designer(name: &str, position: &str) -> Self {
        Self::new(Role::Designer, name, position)
    }

    pub fn manager(name: &str, position: &str) -> Self {
        Self::new(Role::Manager, name, position)
    }

    pub fn add(&mut self, employee: Employee) {
        self.subordinates.push(employee);
    }

    /// Remove the first direct subordinate with this name.
    pub fn remove(&mut self, name: &str) -> Option<Employee> {
        let pos = self.subordinates.iter().position(|e| e.name == name)?;
        Some(self.subordinates.remove(pos))
    }

    pub fn show_details(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "{}: {}, Position: {}", self.role, self.name, self.position)?;
        for subordinate in &self.subordinates {
            subordinate.show_details(out)?;
        }
        Ok(())
    }

    /// Size of the subtree rooted here, including this node.
    pub fn headcount(&self) -> usize {
        1 + self.subordinates.iter().map(Employee::headcount).sum::<usize>()
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let mut manager = Employee::manager("Mike", "Project Manager");
    manager.add(Employee::developer("Paulo", "Senior Developer"));
    manager.add(Employee::developer("Cesar", "Junior Developer"));
    manager.add(Employee::designer("Italo", "UI/UX Designer"));

    writeln!(out, "Employee details under Project Manager:")?;
    manager.show_details(out)?;
    Ok(())
}
