use crate::billing::{
    compute,
    format::{format_quantity, render_report},
    ContractConfig, CostBreakdown, UsageProfile,
};
use crate::config::{apply_edit, Field};
use crate::debug_println;
use std::io::{self, BufRead, Write};

/// Editable contract/usage pair with the breakdown of its latest state
#[derive(Debug, Clone)]
pub struct Session {
    contract: ContractConfig,
    usage: UsageProfile,
    breakdown: CostBreakdown,
}

impl Session {
    pub fn new(contract: ContractConfig, usage: UsageProfile) -> Self {
        let breakdown = compute(&contract, &usage);
        Self {
            contract,
            usage,
            breakdown,
        }
    }

    pub fn contract(&self) -> &ContractConfig {
        &self.contract
    }

    pub fn usage(&self) -> &UsageProfile {
        &self.usage
    }

    pub fn breakdown(&self) -> &CostBreakdown {
        &self.breakdown
    }

    /// Apply one edit and recompute
    pub fn edit(&mut self, field: Field, raw: &str) -> &CostBreakdown {
        apply_edit(&mut self.contract, &mut self.usage, field, raw);
        self.recompute()
    }

    pub fn reset(&mut self) -> &CostBreakdown {
        self.contract = ContractConfig::default();
        self.usage = UsageProfile::default();
        self.recompute()
    }

    fn recompute(&mut self) -> &CostBreakdown {
        self.breakdown = compute(&self.contract, &self.usage);
        debug_println!("recompute: {:?}", self.breakdown);
        &self.breakdown
    }

    pub fn report(&self) -> String {
        render_report(&self.contract, &self.usage, &self.breakdown)
    }

    /// Line-oriented editor. Each `field value` line is an edit followed by
    /// a re-render; bad lines are reported and the session continues.
    pub fn run_interactive<R: BufRead, W: Write>(
        &mut self,
        reader: R,
        mut writer: W,
    ) -> io::Result<()> {
        writeln!(writer, "{}", self.report())?;
        writeln!(writer, "Type `help` for commands.")?;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match Command::parse(line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => write_help(&mut writer, self)?,
                Ok(Command::Show) => writeln!(writer, "{}", self.report())?,
                Ok(Command::Reset) => {
                    self.reset();
                    writeln!(writer, "{}", self.report())?;
                }
                Ok(Command::Edit(field, raw)) => {
                    self.edit(field, &raw);
                    writeln!(writer, "{}", self.report())?;
                }
                Err(message) => writeln!(writer, "Error: {}", message)?,
            }
        }

        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ContractConfig::default(), UsageProfile::default())
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Quit,
    Help,
    Show,
    Reset,
    Edit(Field, String),
}

impl Command {
    fn parse(line: &str) -> Result<Self, String> {
        match line {
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            "help" | "?" => return Ok(Command::Help),
            "show" => return Ok(Command::Show),
            "reset" => return Ok(Command::Reset),
            _ => {}
        }

        let (name, raw) = line
            .split_once('=')
            .or_else(|| line.split_once(char::is_whitespace))
            .ok_or_else(|| format!("Expected `FIELD VALUE`, got: {}", line))?;

        let field = name.parse::<Field>().map_err(|e| e.to_string())?;
        Ok(Command::Edit(field, raw.trim().to_string()))
    }
}

fn write_help<W: Write>(writer: &mut W, session: &Session) -> io::Result<()> {
    writeln!(writer, "Commands: FIELD VALUE | FIELD=VALUE | show | reset | help | quit")?;
    writeln!(writer, "Fields:")?;
    for field in Field::ALL {
        writeln!(
            writer,
            "  {:<24} {:<28} {}",
            field.name(),
            field.label(),
            format_quantity(field.get(&session.contract, &session.usage))
        )?;
    }
    Ok(())
}
