//! Interactive menu over a [`CityNetwork`].
//!
//! The console reads whole lines from any [`BufRead`] and writes to any
//! [`Write`], so sessions can be scripted in tests. Invalid fields are asked
//! for again; failed lookups and road constraints abort the current
//! operation and return to the menu.

use anyhow::{bail, Result};
use rwroads_core::{CityId, CityNetwork, Error};
use rwroads_storage::FlatFileWriter;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

const RULE: &str = "=====================================";
const CELL: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCities,
    AddRoad,
    AddBudget,
    EditCity,
    SearchCity,
    DisplayCities,
    DisplayRoads,
    DisplayRecorded,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::AddCities,
        MenuChoice::AddRoad,
        MenuChoice::AddBudget,
        MenuChoice::EditCity,
        MenuChoice::SearchCity,
        MenuChoice::DisplayCities,
        MenuChoice::DisplayRoads,
        MenuChoice::DisplayRecorded,
        MenuChoice::Exit,
    ];

    /// Maps menu numbers 1 to 9.
    pub fn from_number(n: i64) -> Option<Self> {
        usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddCities => "Add new city(ies)",
            MenuChoice::AddRoad => "Add roads between cities.",
            MenuChoice::AddBudget => "Add the budget for roads.",
            MenuChoice::EditCity => "Edit city",
            MenuChoice::SearchCity => "Search for city using its index",
            MenuChoice::DisplayCities => "Display cities.",
            MenuChoice::DisplayRoads => "Display roads.",
            MenuChoice::DisplayRecorded => "Display recorded data on console.",
            MenuChoice::Exit => "Exit",
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    network: CityNetwork,
    writer: FlatFileWriter,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, network: CityNetwork, writer: FlatFileWriter) -> Self {
        Self {
            input,
            output,
            network,
            writer,
        }
    }

    pub fn network(&self) -> &CityNetwork {
        &self.network
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu until Exit is chosen or the input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                info!("input closed, leaving menu");
                return Ok(());
            };

            let Ok(number) = line.trim().parse::<i64>() else {
                writeln!(
                    self.output,
                    "Error: Invalid input. Please enter a number between 1 and 9."
                )?;
                continue;
            };

            match MenuChoice::from_number(number) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting system. Goodbye!")?;
                    return Ok(());
                }
                Some(choice) => self.dispatch(choice)?,
                None => writeln!(
                    self.output,
                    "Error: Invalid choice. Please enter a number between 1 and 9."
                )?,
            }

            if self.prompt("\nPress Enter to continue...")?.is_none() {
                return Ok(());
            }
        }
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::AddCities => self.add_cities(),
            MenuChoice::AddRoad => self.add_road(),
            MenuChoice::AddBudget => self.add_budget(),
            MenuChoice::EditCity => self.edit_city(),
            MenuChoice::SearchCity => self.search_city(),
            MenuChoice::DisplayCities => Ok(display_cities(&mut self.output, &self.network)?),
            MenuChoice::DisplayRoads => Ok(display_roads(&mut self.output, &self.network)?),
            MenuChoice::DisplayRecorded => Ok(display_recorded(&mut self.output, &self.network)?),
            MenuChoice::Exit => Ok(()),
        }
    }

    /// Rewrite both listings. Failures are logged and otherwise ignored.
    pub fn persist_all(&self) {
        self.persist_cities();
        self.persist_roads();
    }

    fn persist_cities(&self) {
        if let Err(e) = self.writer.write_cities(self.network.registry()) {
            warn!("failed to write cities file: {:#}", e);
        }
    }

    fn persist_roads(&self) {
        if let Err(e) = self.writer.write_roads(&self.network) {
            warn!("failed to write roads file: {:#}", e);
        }
    }

    fn add_cities(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Add New City(ies) ===")?;

        let count = loop {
            let line = self.require("Enter number of cities to add (1-10): ")?;
            match line.trim().parse::<u32>() {
                Ok(n) if (1..=10).contains(&n) => break n,
                _ => writeln!(
                    self.output,
                    "Error: Please enter a valid number between 1 and 10."
                )?,
            }
        };

        for k in 1..=count {
            loop {
                let raw = self.require(&format!("Enter the name of city {}: ", k))?;
                match self.network.add_city(&raw) {
                    Ok(id) => {
                        let name = self.network.find_city(id)?.name.clone();
                        writeln!(self.output, "City '{}' added with ID {}", name, id)?;
                        break;
                    }
                    Err(e) if e.is_validation() => {
                        writeln!(self.output, "Error: {}. Please try again.", e)?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        self.persist_all();
        writeln!(self.output, "Cities added successfully!")?;
        Ok(())
    }

    fn add_road(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Add Roads Between Cities ===")?;
        let first = self.require("Enter the name of the first city: ")?;
        let second = self.require("Enter the name of the second city: ")?;

        match self.network.add_road(&first, &second) {
            Ok(_) => {
                self.persist_roads();
                writeln!(self.output, "Road added between {} and {}.", first, second)?;
            }
            Err(e) if e.is_lookup() => {
                writeln!(self.output, "Error: One or both cities not found.")?;
            }
            Err(Error::SelfLoop) => {
                writeln!(self.output, "Error: Cannot add road from a city to itself.")?;
            }
            Err(Error::RoadExists) => {
                writeln!(
                    self.output,
                    "Road already exists between {} and {}.",
                    first, second
                )?;
            }
            Err(e) if e.is_graph() => writeln!(self.output, "Error: {}.", e)?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn add_budget(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Add Budget for Roads ===")?;
        let first = self.require("Enter the name of the first city: ")?;
        let second = self.require("Enter the name of the second city: ")?;

        match self.network.road_between(&first, &second) {
            Ok(_) => {}
            Err(e) if e.is_lookup() => {
                writeln!(self.output, "Error: One or both cities not found.")?;
                return Ok(());
            }
            Err(Error::NoRoad) => {
                writeln!(
                    self.output,
                    "Error: No road exists between {} and {}. Add road first.",
                    first, second
                )?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        loop {
            let line = self.require("Enter the budget for the road (in billion RWF): ")?;
            let amount = line.trim().parse::<f64>().ok().filter(|a| a.is_finite());
            match amount.map(|a| self.network.set_budget(&first, &second, a)) {
                Some(Ok(())) => break,
                Some(Err(Error::NonPositiveBudget(_))) | None => writeln!(
                    self.output,
                    "Error: Please enter a valid positive budget amount."
                )?,
                Some(Err(e)) => return Err(e.into()),
            }
        }

        self.persist_roads();
        writeln!(
            self.output,
            "Budget added for the road between {} and {}.",
            first, second
        )?;
        Ok(())
    }

    fn edit_city(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Edit City ===")?;

        let id = loop {
            let line = self.require("Enter the index of the city to edit: ")?;
            match line.trim().parse::<CityId>() {
                Ok(id) if self.network.find_city(id).is_ok() => break id,
                _ => writeln!(
                    self.output,
                    "Error: City with index {} not found.",
                    line.trim()
                )?,
            }
        };

        let current = self.network.find_city(id)?.name.clone();
        writeln!(self.output, "Current name: {}", current)?;

        loop {
            let raw = self.require("Enter the new name for city: ")?;
            match self.network.rename_city(id, &raw) {
                Ok(_) => break,
                Err(e) if e.is_validation() => {
                    writeln!(self.output, "Error: {}. Please try again.", e)?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.persist_all();
        writeln!(self.output, "City updated successfully.")?;
        Ok(())
    }

    fn search_city(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Search for City ===")?;
        let line = self.require("Enter the index of the city to search: ")?;
        let query = line.trim();

        let found = query
            .parse::<CityId>()
            .ok()
            .and_then(|id| self.network.registry().find_by_id(id));
        match found {
            Some(city) => writeln!(self.output, "City found: {}. {}", city.id, city.name)?,
            None => writeln!(self.output, "City with index {} not found.", query)?,
        }
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", RULE)?;
        writeln!(self.output, "Rwanda Cities and Roads Management")?;
        writeln!(self.output, "{}", RULE)?;
        for (n, choice) in (1..).zip(MenuChoice::ALL) {
            writeln!(self.output, "{}. {}", n, choice.label())?;
        }
        writeln!(self.output, "{}", RULE)
    }

    /// Print `text` and read one line. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so such a line is rejected
    /// like any other bad input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Like [`Console::prompt`], but end of input is an error.
    fn require(&mut self, text: &str) -> Result<String> {
        match self.prompt(text)? {
            Some(line) => Ok(line),
            None => bail!("input closed in the middle of an operation"),
        }
    }
}

fn display_cities(out: &mut impl Write, network: &CityNetwork) -> io::Result<()> {
    writeln!(out, "\n=== Cities ===")?;
    let registry = network.registry();
    if registry.is_empty() {
        return writeln!(out, "No cities recorded.");
    }
    for city in registry.iter() {
        writeln!(out, "{}: {}", city.id, city.name)?;
    }
    Ok(())
}

fn display_road_matrix(out: &mut impl Write, network: &CityNetwork) -> io::Result<()> {
    for row in network.store().road_rows() {
        for &present in row {
            write!(out, "{} ", u8::from(present))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn display_roads(out: &mut impl Write, network: &CityNetwork) -> io::Result<()> {
    writeln!(out, "\n=== Display Roads ===")?;
    display_cities(out, network)?;
    writeln!(out, "\nRoad adjacency matrix:")?;
    if network.registry().is_empty() {
        return writeln!(out, "No cities to display roads for.");
    }
    display_road_matrix(out, network)
}

fn display_recorded(out: &mut impl Write, network: &CityNetwork) -> io::Result<()> {
    writeln!(out, "\n=== Display Recorded Data ===")?;
    display_cities(out, network)?;

    writeln!(out, "\nRoad adjacency matrix:")?;
    display_road_matrix(out, network)?;

    writeln!(out, "\nBudget adjacency matrix (billion RWF):")?;
    let labels: Vec<String> = network
        .registry()
        .names()
        .map(|name| name.chars().take(CELL).collect())
        .collect();

    write!(out, "{:CELL$}", "")?;
    for label in &labels {
        write!(out, "{:<CELL$}", label)?;
    }
    writeln!(out)?;
    // 15 per column, one short of the cell width
    writeln!(out, "{}", "-".repeat(CELL + 15 * labels.len()))?;

    for (label, row) in labels.iter().zip(network.store().budget_rows()) {
        write!(out, "{:<CELL$}", label)?;
        for &budget in row {
            if budget == 0.0 {
                write!(out, "{:<CELL$}", "-")?;
            } else {
                write!(out, "{:<CELL$.2}", budget)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::AddCities));
        assert_eq!(MenuChoice::from_number(9), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(10), None);
        assert_eq!(MenuChoice::from_number(-3), None);
    }

    #[test]
    fn test_display_road_matrix() {
        let mut network = CityNetwork::with_defaults();
        network.add_road("Kigali", "Rusizi").unwrap();
        let mut out = Vec::new();
        display_road_matrix(&mut out, &network).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], "0 0 0 0 0 0 1 ");
        assert_eq!(rows[6], "1 0 0 0 0 0 0 ");
    }

    #[test]
    fn test_display_recorded_budget_table() {
        let mut network = CityNetwork::with_defaults();
        network.add_road("Kigali", "Huye").unwrap();
        network.set_budget("Kigali", "Huye", 4.0).unwrap();
        let mut out = Vec::new();
        display_recorded(&mut out, &network).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Budget adjacency matrix (billion RWF):"));
        assert!(text.contains(&"-".repeat(16 + 15 * 7)));
        let kigali_row = text
            .lines()
            .find(|line| line.starts_with("Kigali          -"))
            .unwrap();
        assert_eq!(&kigali_row[32..48], "4.00            ");
    }

    #[test]
    fn test_display_empty_network() {
        let network = CityNetwork::default();
        let mut out = Vec::new();
        display_roads(&mut out, &network).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No cities recorded."));
        assert!(text.contains("No cities to display roads for."));
    }
}
