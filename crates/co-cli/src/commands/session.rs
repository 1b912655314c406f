use std::fs;
use std::io::{self, Write};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tokio::io::{AsyncBufReadExt, BufReader};

use co_core::{HistoryItem, SelectionMode, SystemClock};
use co_oracle::{ExportFormat, Oracle};

use super::{InsightArgs, print_insight, print_result};

const HELP: &str = "\
  mode [numeric|options|divination]   show or switch the selection mode
  range <min> <max>                   set numeric bounds (inclusive)
  add <option>                        add an option
  remove <n>                          remove option n
  options [clear]                     list (or clear) options
  ask <question>                      set the divination question
  draw [question]                     draw in the current mode
  history [mode]                      list past draws, optionally of one mode
  export <md|text|json> [path]        export the session
  clear                               forget past draws
  status                              show mode, bounds, and question
  quit                                leave the session";

enum Flow {
    Continue,
    Quit,
}

struct Repl {
    oracle: Oracle<SystemClock>,
    question: String,
}

pub async fn run(args: &InsightArgs) -> Result<(), String> {
    let (requester, config) = args.build()?;
    let mut repl = Repl {
        oracle: Oracle::new(SystemClock::new(), requester, config),
        question: String::new(),
    };

    println!("  {} Chronos Oracle", "Session".bold());
    println!("  Mode: {}", repl.oracle.mode());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next_line().await.map_err(|e| e.to_string())? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match repl.handle(input).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => println!(),
            Err(e) => println!("{}\n", e.yellow()),
        }
    }

    Ok(())
}

impl Repl {
    async fn handle(&mut self, input: &str) -> Result<Flow, String> {
        let (command, rest) = input
            .split_once(char::is_whitespace)
            .map_or((input, ""), |(c, r)| (c, r.trim()));

        match command.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Flow::Quit),
            "help" | "h" | "?" => println!("{HELP}"),
            "mode" => self.mode(rest)?,
            "range" => self.range(rest)?,
            "add" => {
                if !self.oracle.config_mut().add_option(rest) {
                    return Err("usage: add <option>".into());
                }
                self.options();
            }
            "remove" | "rm" => self.remove(rest)?,
            "options" | "opts" => {
                if rest.eq_ignore_ascii_case("clear") {
                    self.oracle.config_mut().clear_options();
                }
                self.options();
            }
            "ask" => {
                if rest.is_empty() {
                    return Err("usage: ask <question>".into());
                }
                self.question = rest.to_string();
                println!("  Question: {}", self.question.italic());
            }
            "draw" | "d" => self.draw(rest).await?,
            "history" | "log" => self.history(rest)?,
            "export" => self.export(rest)?,
            "clear" => {
                self.oracle.clear_log();
                println!("  History cleared.");
            }
            "status" => self.status(),
            other => return Err(format!("unknown command '{other}', type 'help'")),
        }
        Ok(Flow::Continue)
    }

    fn mode(&mut self, rest: &str) -> Result<(), String> {
        if !rest.is_empty() {
            let mode = SelectionMode::parse(rest)
                .ok_or_else(|| format!("unknown mode '{rest}', try numeric, options, or divination"))?;
            self.oracle.set_mode(mode);
        }
        let mode = self.oracle.mode();
        println!("  Mode: {}  {}", mode.to_string().bold(), mode.describe().dimmed());
        Ok(())
    }

    fn range(&mut self, rest: &str) -> Result<(), String> {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        let [min, max] = parts.as_slice() else {
            return Err("usage: range <min> <max>".into());
        };
        let min: i64 = min.parse().map_err(|_| format!("not a number: {min}"))?;
        let max: i64 = max.parse().map_err(|_| format!("not a number: {max}"))?;
        self.oracle.config_mut().set_bounds(min, max);
        println!("  Range: {min}..={max}");
        Ok(())
    }

    fn remove(&mut self, rest: &str) -> Result<(), String> {
        let index: usize = rest
            .parse()
            .map_err(|_| "usage: remove <n>".to_string())?;
        let removed = index
            .checked_sub(1)
            .and_then(|i| self.oracle.config_mut().remove_option(i))
            .ok_or_else(|| format!("no option {index}"))?;
        println!("  Removed: {removed}");
        self.options();
        Ok(())
    }

    fn options(&self) {
        let options = &self.oracle.config().options;
        if options.is_empty() {
            println!("  {}", "(no options)".dimmed());
        }
        for (i, option) in options.iter().enumerate() {
            println!("  {:>2}. {option}", i + 1);
        }
    }

    async fn draw(&mut self, rest: &str) -> Result<(), String> {
        let question = if rest.is_empty() {
            self.question.clone()
        } else {
            rest.to_string()
        };
        let request = self.oracle.request(Some(&question));
        let pending = self.oracle.begin(request).map_err(|e| e.to_string())?;

        print_result(pending.item());
        if !pending.is_ready() {
            println!("  {}", "consulting the oracle...".dimmed());
        }
        let item = self.oracle.complete(pending).await;
        print_insight(&item);
        if item.mode == SelectionMode::Divination {
            self.question.clear();
        }
        Ok(())
    }

    fn history(&self, rest: &str) -> Result<(), String> {
        let log = self.oracle.log();
        let items: Vec<&HistoryItem> = if rest.is_empty() {
            log.entries().iter().collect()
        } else {
            let mode = SelectionMode::parse(rest)
                .ok_or_else(|| format!("unknown mode '{rest}', try numeric, options, or divination"))?;
            log.by_mode(mode).collect()
        };
        if items.is_empty() {
            println!("  {}", "(no draws yet)".dimmed());
            return Ok(());
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Time", "Mode", "Seed", "Result", "Question"]);
        for (i, item) in items.iter().enumerate() {
            table.add_row(vec![
                (items.len() - i).to_string(),
                item.timestamp.format("%H:%M:%S").to_string(),
                item.mode.to_string(),
                format!(".{:03}", item.millisecond_seed),
                item.result_text(),
                item.question.clone().unwrap_or_default(),
            ]);
        }
        println!("{table}");
        Ok(())
    }

    fn export(&self, rest: &str) -> Result<(), String> {
        let (format, path) = rest
            .split_once(char::is_whitespace)
            .map_or((rest, ""), |(f, p)| (f, p.trim()));
        let format = ExportFormat::parse(format)
            .ok_or_else(|| "usage: export <md|text|json> [path]".to_string())?;
        let output = self
            .oracle
            .log()
            .export(format)
            .map_err(|e| format!("export failed: {e}"))?;

        if path.is_empty() {
            println!("{output}");
        } else {
            fs::write(path, &output).map_err(|e| format!("cannot write {path}: {e}"))?;
            println!("  Exported to {}", path.bold());
        }
        Ok(())
    }

    fn status(&self) {
        let config = self.oracle.config();
        println!("  Mode:     {}", self.oracle.mode());
        println!("  Range:    {}..={}", config.min, config.max);
        println!("  Options:  {}", config.options.len());
        if !self.question.is_empty() {
            println!("  Question: {}", self.question);
        }
        println!("  Draws:    {}", self.oracle.log().len());
    }
}
