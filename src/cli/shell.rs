//! Interactive menu over a single in-memory inventory.

use std::io::{self, BufRead, Write};

use crate::{
    cli::{report_load, write_inventory, write_tracks},
    config::InventoryFiles,
    domain::error::parse_key,
    storage::{files, inventory::Inventory},
};

const INVALID_INPUT: &str = "Invalid Input! Try again.";

pub struct Shell<'a, R, W> {
    input: R,
    out: W,
    files: &'a InventoryFiles,
    inventory: Inventory,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(input: R, out: W, files: &'a InventoryFiles) -> Self {
        Self {
            input,
            out,
            files,
            inventory: Inventory::new(),
        }
    }

    /// Loads the inventory, then serves the main menu until `x` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.reload()?;
        match self.main_menu() {
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
            other => other,
        }
    }

    fn main_menu(&mut self) -> io::Result<()> {
        loop {
            writeln!(
                self.out,
                "Main Menu\n\n[l] load Inventory from file\n[a] Add CD / Album\n[d] Display Current Inventory"
            )?;
            writeln!(
                self.out,
                "[c] Choose CD / Album\n[s] Save Inventory to file\n[x] exit\n"
            )?;

            let choice = self.choice(
                "Which operation would you like to perform? [l, a, d, c, s or x]: ",
                &["l", "a", "d", "c", "s", "x"],
            )?;
            match choice.as_str() {
                "x" => return Ok(()),
                "l" => self.confirm_reload()?,
                "a" => {
                    self.add_cd()?;
                    write_inventory(&mut self.out, &self.inventory)?;
                }
                "d" => write_inventory(&mut self.out, &self.inventory)?,
                "c" => self.choose_cd()?,
                "s" => self.confirm_save()?,
                _ => writeln!(self.out, "General Error")?,
            }
        }
    }

    fn cd_menu(&mut self, cd_id: u32) -> io::Result<()> {
        loop {
            writeln!(
                self.out,
                "CD Sub Menu\n\n[a] Add track\n[d] Display cd / Album details\n[r] Remove track\n[x] exit to Main Menu"
            )?;

            let choice = self.choice(
                "Which operation would you like to perform? [a, d, r or x]: ",
                &["a", "d", "r", "x"],
            )?;
            match choice.as_str() {
                "x" => return Ok(()),
                "a" => self.add_track(cd_id)?,
                "d" => self.show_tracks(cd_id)?,
                "r" => self.remove_track(cd_id)?,
                _ => writeln!(self.out, "General Error")?,
            }
        }
    }

    fn reload(&mut self) -> io::Result<()> {
        let report = files::load(self.files);
        report_load(&mut self.out, &report.status)?;
        self.inventory = report.inventory;
        Ok(())
    }

    fn confirm_reload(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file."
        )?;
        let answer =
            self.prompt("type 'yes' to continue and reload from file. otherwise reload will be canceled: ")?;
        if answer.eq_ignore_ascii_case("yes") {
            writeln!(self.out, "reloading...")?;
            self.reload()?;
        } else {
            writeln!(self.out, "canceling... Inventory data NOT reloaded.")?;
        }
        write_inventory(&mut self.out, &self.inventory)
    }

    fn confirm_save(&mut self) -> io::Result<()> {
        write_inventory(&mut self.out, &self.inventory)?;
        let answer = self.prompt("Save this inventory to file? [y/n] ")?;
        if !answer.eq_ignore_ascii_case("y") {
            return writeln!(self.out, "The inventory was NOT saved to file.");
        }
        match files::save(self.files, &self.inventory) {
            Ok(()) => writeln!(self.out, "Inventory saved."),
            Err(err) => writeln!(self.out, "There was a general error!\n{err}"),
        }
    }

    fn add_cd(&mut self) -> io::Result<()> {
        let id = loop {
            let id = self.prompt_key("Enter ID: ", "CD id")?;
            if !self.inventory.contains(id) {
                break id;
            }
            writeln!(
                self.out,
                "Album with ID {id} already exists. Choose another ID number"
            )?;
        };
        let title = self.prompt_text("What is the CD's title? ")?;
        let artist = self.prompt_text("What is the Artist's name? ")?;

        if let Err(err) = self.inventory.add_cd(id, &title, &artist) {
            writeln!(self.out, "{err}")?;
        }
        Ok(())
    }

    fn choose_cd(&mut self) -> io::Result<()> {
        write_inventory(&mut self.out, &self.inventory)?;
        let id = self.prompt_key("Select the CD / Album index: ", "CD id")?;
        if let Err(err) = self.inventory.find_by_id(id) {
            return writeln!(self.out, "{err}");
        }
        self.cd_menu(id)
    }

    fn show_tracks(&mut self, cd_id: u32) -> io::Result<()> {
        match self.inventory.find_by_id(cd_id) {
            Ok(cd) => write_tracks(&mut self.out, cd),
            Err(err) => writeln!(self.out, "{err}"),
        }
    }

    fn add_track(&mut self, cd_id: u32) -> io::Result<()> {
        let position = loop {
            let position = self.prompt_key("Enter Position on CD / Album: ", "track position")?;
            let taken = self
                .inventory
                .find_by_id(cd_id)
                .is_ok_and(|cd| cd.track(position).is_some());
            if !taken {
                break position;
            }
            writeln!(
                self.out,
                "Track with ID {position} already exists. Choose another ID number"
            )?;
        };
        let title = self.prompt_text("What is the Track's title? ")?;
        let length = self.prompt_text("What is the Track's length? ")?;

        if let Err(err) = self.inventory.add_track(cd_id, position, &title, &length) {
            writeln!(self.out, "{err}")?;
        }
        Ok(())
    }

    fn remove_track(&mut self, cd_id: u32) -> io::Result<()> {
        self.show_tracks(cd_id)?;
        let slot = loop {
            match self.prompt("Select the Track index: ")?.parse::<usize>() {
                Ok(slot) => break slot,
                Err(_) => writeln!(self.out, "{INVALID_INPUT}")?,
            }
        };
        match self.inventory.remove_track(cd_id, slot) {
            Ok(Some(track)) => writeln!(self.out, "Removed {track}"),
            Ok(None) => writeln!(self.out, "No track in slot {slot}, nothing removed"),
            Err(err) => writeln!(self.out, "{err}"),
        }
    }

    /// Reads one trimmed line. End of input surfaces as `UnexpectedEof`.
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.out, "{text}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    fn choice(&mut self, text: &str, options: &[&str]) -> io::Result<String> {
        loop {
            let answer = self.prompt(text)?.to_lowercase();
            if options.contains(&answer.as_str()) {
                writeln!(self.out)?;
                return Ok(answer);
            }
        }
    }

    fn prompt_key(&mut self, text: &str, field: &'static str) -> io::Result<u32> {
        loop {
            match parse_key(field, &self.prompt(text)?) {
                Ok(key) => return Ok(key),
                Err(_) => writeln!(self.out, "{INVALID_INPUT}")?,
            }
        }
    }

    /// Non-empty text without the storage delimiter.
    fn prompt_text(&mut self, text: &str) -> io::Result<String> {
        loop {
            let value = self.prompt(text)?;
            if !value.is_empty() && !value.contains(',') {
                return Ok(value);
            }
            writeln!(self.out, "{INVALID_INPUT}")?;
        }
    }
}
