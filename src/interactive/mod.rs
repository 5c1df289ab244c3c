//! Interactive menu for support-desk
//!
//! A guided, numbered menu over the ticket service. Each choice prompts
//! for what it needs, runs one desk command and prints the outcome; the
//! loop keeps going until the user picks exit.

use crate::cli::output::OutputFormatter;
use crate::cli::script::{DeskCommand, execute};
use crate::core::{Priority, TicketId};
use crate::error::Result;
use crate::service::TicketService;
use dialoguer::{Input, Select, theme::ColorfulTheme};

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTicket,
    DeleteTicket,
    FindTicket,
    ShowAll,
    UndoLastAdd,
    PriorityProcessing,
    RoundRobinProcessing,
    Status,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 9] = [
        Self::AddTicket,
        Self::DeleteTicket,
        Self::FindTicket,
        Self::ShowAll,
        Self::UndoLastAdd,
        Self::PriorityProcessing,
        Self::RoundRobinProcessing,
        Self::Status,
        Self::Exit,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::AddTicket => "1. Add Ticket",
            Self::DeleteTicket => "2. Delete Ticket",
            Self::FindTicket => "3. Find Ticket",
            Self::ShowAll => "4. Show All Tickets",
            Self::UndoLastAdd => "5. Undo Last Add",
            Self::PriorityProcessing => "6. Priority Processing",
            Self::RoundRobinProcessing => "7. Round Robin Processing",
            Self::Status => "8. Desk Status",
            Self::Exit => "0. Exit",
        }
    }

    /// Command for choices that need no further input
    pub fn immediate_command(self) -> Option<DeskCommand> {
        match self {
            Self::ShowAll => Some(DeskCommand::List),
            Self::UndoLastAdd => Some(DeskCommand::Undo),
            Self::PriorityProcessing => Some(DeskCommand::ProcessPriority),
            Self::RoundRobinProcessing => Some(DeskCommand::ProcessRoundRobin),
            Self::Status => Some(DeskCommand::Status),
            Self::AddTicket | Self::DeleteTicket | Self::FindTicket | Self::Exit => None,
        }
    }
}

/// Menu loop bound to one desk
pub struct InteractiveMenu<'a> {
    theme: ColorfulTheme,
    service: &'a TicketService,
    output: &'a OutputFormatter,
}

impl<'a> InteractiveMenu<'a> {
    pub fn new(service: &'a TicketService, output: &'a OutputFormatter) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            service,
            output,
        }
    }

    /// Run the menu until the user exits
    ///
    /// Rejected adds are reported and the loop continues; terminal errors
    /// end the session.
    pub fn run(&self) -> Result<()> {
        let labels: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();

        loop {
            self.output.header("==== CUSTOMER SUPPORT TICKET SYSTEM ====");
            let selection = Select::with_theme(&self.theme)
                .with_prompt("Enter option")
                .items(&labels)
                .default(0)
                .interact()?;

            let choice = MenuChoice::ALL[selection];
            let command = match choice {
                MenuChoice::Exit => {
                    self.output.info("Exiting...");
                    return Ok(());
                },
                MenuChoice::AddTicket => self.prompt_add()?,
                MenuChoice::DeleteTicket => DeskCommand::Delete {
                    id: self.prompt_id("Ticket ID to remove")?,
                },
                MenuChoice::FindTicket => DeskCommand::Find {
                    id: self.prompt_id("Ticket ID")?,
                },
                other => match other.immediate_command() {
                    Some(command) => command,
                    None => continue,
                },
            };

            match execute(self.service, command) {
                Ok(outcome) => outcome.render(self.output)?,
                Err(e) if e.is_recoverable() => self.output.error(&e.user_message()),
                Err(e) => return Err(e),
            }
        }
    }

    fn prompt_add(&self) -> Result<DeskCommand> {
        let id = self.prompt_id("Ticket ID")?;
        let customer_name = Input::<String>::with_theme(&self.theme)
            .with_prompt("Customer name")
            .interact_text()?;
        let issue = Input::<String>::with_theme(&self.theme)
            .with_prompt("Issue")
            .interact_text()?;
        let priority = Input::<i32>::with_theme(&self.theme)
            .with_prompt("Priority (1 = urgent, 2/3/4/5 = normal)")
            .default(3)
            .interact_text()?;

        Ok(DeskCommand::Add {
            id,
            customer_name,
            issue,
            priority: Priority::new(priority),
        })
    }

    fn prompt_id(&self, prompt: &str) -> Result<TicketId> {
        Input::<TicketId>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()
            .map_err(Into::into)
    }
}
