//! Read-dispatch loop for the interactive guide.
//!
//! # Responsibility
//! - Prompt, read and parse one command at a time.
//! - Dispatch commands to `GuideService` and render results.
//!
//! # Invariants
//! - One command completes, including any save, before the next line is read.
//! - End of input behaves like `quit`.
//! - Store failures are reported to the user; only terminal I/O errors escape.

use super::command::{parse_command, Command};
use super::table::{write_action_header, write_restaurant_table};
use super::ACTIONS;
use crate::query::list::SortOrder;
use crate::service::guide_service::{AddRestaurantRequest, GuideService};
use crate::store::{RestaurantStore, StoreOrigin};
use log::{debug, error, info};
use std::io::{self, BufRead, Write};

/// Whether the loop keeps running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Startup line shown before the intro banner.
pub fn startup_notice(origin: StoreOrigin) -> &'static str {
    match origin {
        StoreOrigin::Found => "Found restaurant file.\n",
        StoreOrigin::Created => {
            "Restaurant file not found. Created new restaurant file.\nAdd new restaurants now.\n\n"
        }
    }
}

/// One interactive guide session over arbitrary input/output streams.
pub struct Guide<S: RestaurantStore, R: BufRead, W: Write> {
    service: GuideService<S>,
    input: R,
    output: W,
}

impl<S: RestaurantStore, R: BufRead, W: Write> Guide<S, R, W> {
    pub fn new(service: GuideService<S>, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Returns the output sink, consuming the session.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs intro, the command loop and the goodbye banner.
    ///
    /// # Errors
    /// - Returns an error only when the terminal streams fail.
    pub fn launch(&mut self) -> io::Result<()> {
        info!("event=guide_launch module=guide status=start");
        self.intro()?;
        loop {
            let command = self.next_command()?;
            if self.dispatch(command)? == Flow::Quit {
                break;
            }
        }
        self.conclusion()?;
        info!("event=guide_launch module=guide status=ok");
        Ok(())
    }

    /// Executes one command.
    pub fn dispatch(&mut self, command: Command) -> io::Result<Flow> {
        debug!("event=dispatch module=guide command={command:?}");
        match command {
            Command::List(order) => self.list(order)?,
            Command::Find(keyword) => self.find(keyword.as_deref())?,
            Command::Add => self.add()?,
            Command::Help => self.help()?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(action) => {
                debug!("event=dispatch module=guide status=unknown action={action}");
                writeln!(self.output, "\nI don't understand that command.\n")?;
                writeln!(self.output, "Actions: {}", ACTIONS.join(", "))?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Prompts until a non-blank line arrives; end of input yields `Quit`.
    fn next_command(&mut self) -> io::Result<Command> {
        loop {
            let Some(line) = self.prompt("> ")? else {
                debug!("event=read_command module=guide status=eof");
                return Ok(Command::Quit);
            };
            if let Some(command) = parse_command(&line) {
                return Ok(command);
            }
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and fall through to `Unknown`.
        Ok(Some(String::from_utf8_lossy(&raw).trim().to_string()))
    }

    fn list(&mut self, order: SortOrder) -> io::Result<()> {
        write_action_header(&mut self.output, "Listing restaurants")?;
        match self.service.list(order) {
            Ok(restaurants) => {
                write_restaurant_table(&mut self.output, &restaurants)?;
                writeln!(
                    self.output,
                    "Sort using: 'list cuisine' or 'list by cuisine'\n"
                )
            }
            Err(err) => self.report_read_error(&err),
        }
    }

    fn find(&mut self, keyword: Option<&str>) -> io::Result<()> {
        write_action_header(&mut self.output, "Find a restaurant")?;
        let Some(keyword) = keyword else {
            writeln!(
                self.output,
                "Find using a key phrase to search the restaurant list."
            )?;
            return writeln!(self.output, "Examples: 'find pizza', 'find fast'\n");
        };

        match self.service.find(keyword) {
            Ok(found) => write_restaurant_table(&mut self.output, &found),
            Err(err) => self.report_read_error(&err),
        }
    }

    fn add(&mut self) -> io::Result<()> {
        write_action_header(&mut self.output, "Add a restaurant")?;
        let request = match self.collect_add_request()? {
            Some(request) => request,
            None => {
                debug!("event=add_restaurant module=guide status=aborted reason=eof");
                return writeln!(self.output, "\nSave Error: Restaurant not added\n");
            }
        };

        match self.service.add(&request) {
            Ok(_) => writeln!(self.output, "\nRestaurant Added\n"),
            Err(err) => {
                error!("event=add_restaurant module=guide status=error error={err}");
                writeln!(self.output, "\nSave Error: Restaurant not added\n")
            }
        }
    }

    fn collect_add_request(&mut self) -> io::Result<Option<AddRestaurantRequest>> {
        let Some(name) = self.prompt("Restaurant name: ")? else {
            return Ok(None);
        };
        let Some(cuisine) = self.prompt("Cuisine type: ")? else {
            return Ok(None);
        };
        let Some(price) = self.prompt("Average price: ")? else {
            return Ok(None);
        };
        Ok(Some(AddRestaurantRequest {
            name,
            cuisine,
            price,
        }))
    }

    fn help(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nActions: {}", ACTIONS.join(", "))?;
        writeln!(self.output, "  list [[by] name|cuisine|price]")?;
        writeln!(self.output, "  find <keyword>")?;
        writeln!(self.output, "  add")?;
        writeln!(self.output, "  quit\n")
    }

    fn report_read_error(&mut self, err: &dyn std::error::Error) -> io::Result<()> {
        error!("event=load_restaurants module=guide status=error error={err}");
        writeln!(self.output, "Could not read restaurant file.\n")
    }

    fn intro(&mut self) -> io::Result<()> {
        writeln!(self.output, "<<< Welcome to the Food Finder >>>\n")?;
        writeln!(
            self.output,
            "This is an interactive guide to help you find the food you crave."
        )?;
        writeln!(self.output, "Type 'help' to see a list of commands\n")
    }

    fn conclusion(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n<<< Goodbye! >>>\n\n")?;
        self.output.flush()
    }
}
