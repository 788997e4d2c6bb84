//! Edit command handler
//!
//! A line-driven editing session. Stdin is read on its own thread and fed
//! through a channel together with Ctrl+C and background load results, so
//! the loop below is the only owner of the coordinator.
//!
//! Commands:
//!   on <domain> <id>     enable a node and its subtree
//!   off <domain> <id>    disable a node and its subtree
//!   all <domain>         enable every node
//!   none <domain>        disable every node
//!   package <id>         switch package (pending autosave is discarded)
//!   show [domain]        print the trees
//!   quit                 save pending changes and exit

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};

use rentvix::application::{LoadOutcome, LoadResult, LoadTicket};
use rentvix::domain::value_objects::{NodeId, PackageId, TreeDomain};
use rentvix::presentation::factory;
use rentvix::presentation::render::{render_summary, render_warning};
use rentvix::{RentvixError, SelectionCoordinator, SessionPhase};

use super::show::{render_domain, tree_json};
use super::Context;

/// Receive timeout when no autosave is armed
const IDLE_POLL: Duration = Duration::from_millis(250);

enum Input {
    Line(String),
    Loaded(LoadTicket, LoadOutcome),
    Interrupt,
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum EditCommand {
    Toggle {
        domain: TreeDomain,
        id: NodeId,
        enabled: bool,
    },
    SetAll {
        domain: TreeDomain,
        enabled: bool,
    },
    Package(PackageId),
    Show(Option<TreeDomain>),
    Quit,
}

impl EditCommand {
    fn parse(line: &str) -> Result<Option<Self>, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((verb, args)) = words.split_first() else {
            return Ok(None);
        };
        let domain_arg = |i: usize| -> Result<TreeDomain, String> {
            let raw = args.get(i).ok_or("missing domain (menu|feature)")?;
            TreeDomain::parse(raw).ok_or_else(|| format!("unknown domain '{raw}'"))
        };

        let verb = verb.to_lowercase();
        let command = match verb.as_str() {
            "on" | "off" => {
                let domain = domain_arg(0)?;
                let id = args.get(1).ok_or("missing node id")?;
                EditCommand::Toggle {
                    domain,
                    id: NodeId::new(*id),
                    enabled: verb == "on",
                }
            }
            "all" | "none" => EditCommand::SetAll {
                domain: domain_arg(0)?,
                enabled: verb == "all",
            },
            "package" => {
                let raw = args.first().ok_or("missing package id")?;
                let id = raw
                    .parse::<PackageId>()
                    .map_err(|_| format!("invalid package id '{raw}'"))?;
                EditCommand::Package(id)
            }
            "show" => EditCommand::Show(match args.first() {
                Some(_) => Some(domain_arg(0)?),
                None => None,
            }),
            "quit" | "exit" | "q" => EditCommand::Quit,
            other => return Err(format!("unknown command '{other}'")),
        };
        Ok(Some(command))
    }
}

pub fn cmd_edit(ctx: &Context, package: i64) -> Result<()> {
    let first = ctx.require_package(package)?;
    let events = factory::create_event_sink(ctx.json, ctx.render);
    let mut coordinator =
        factory::create_coordinator(&ctx.data_dir, ctx.config.coordinator_options(), events);

    let (tx, rx) = mpsc::channel::<Input>();

    let interrupt = tx.clone();
    ctrlc::set_handler(move || {
        let _ = interrupt.send(Input::Interrupt);
    })
    .context("failed to install Ctrl+C handler")?;

    let lines = tx.clone();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if lines.send(Input::Line(line)).is_err() {
                return;
            }
        }
        let _ = lines.send(Input::Eof);
    });

    start_load(&mut coordinator, first.id, &tx);

    // Commands run strictly in input order; a load in flight holds the queue.
    let mut queue: VecDeque<EditCommand> = VecDeque::new();

    loop {
        let timeout = coordinator.time_to_save(Instant::now()).unwrap_or(IDLE_POLL);

        match rx.recv_timeout(timeout) {
            Ok(Input::Line(line)) => match EditCommand::parse(&line) {
                Ok(Some(command)) => queue.push_back(command),
                Ok(None) => {}
                Err(message) => eprint!("{}", render_warning(&message, ctx.render)),
            },
            Ok(Input::Eof) => queue.push_back(EditCommand::Quit),
            Ok(Input::Loaded(ticket, outcome)) => {
                // Stale loads are dropped; failures reach the event sink.
                if let Ok(LoadResult::Ready) = coordinator.complete_load(ticket, outcome) {
                    if !ctx.json {
                        print!("{}", summary(&coordinator));
                    }
                }
            }
            Ok(Input::Interrupt) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }

        if drain(ctx, &mut coordinator, &mut queue, &tx) {
            break;
        }
        coordinator.poll(Instant::now());
    }

    coordinator.flush();
    coordinator.close();
    Ok(())
}

/// Apply queued commands until the queue empties or a load starts.
/// Returns true once `quit` is reached.
fn drain(
    ctx: &Context,
    coordinator: &mut SelectionCoordinator,
    queue: &mut VecDeque<EditCommand>,
    tx: &Sender<Input>,
) -> bool {
    while !matches!(coordinator.phase(), SessionPhase::Loading(_)) {
        match queue.pop_front() {
            None => return false,
            Some(EditCommand::Quit) => return true,
            Some(command) => apply(ctx, coordinator, command, tx),
        }
    }
    false
}

/// Kick off a load; the fetches run on a background thread
fn start_load(coordinator: &mut SelectionCoordinator, package_id: PackageId, tx: &Sender<Input>) {
    let ticket = coordinator.begin_load(package_id);
    let loader = coordinator.loader();
    let tx = tx.clone();
    thread::spawn(move || {
        let outcome = loader.fetch(ticket.package_id());
        let _ = tx.send(Input::Loaded(ticket, outcome));
    });
}

fn apply(
    ctx: &Context,
    coordinator: &mut SelectionCoordinator,
    command: EditCommand,
    tx: &Sender<Input>,
) {
    let now = Instant::now();
    let result = match command {
        EditCommand::Toggle {
            domain,
            id,
            enabled,
        } => coordinator.toggle(domain, &id, enabled, now).map(|changed| {
            if !changed {
                eprint!(
                    "{}",
                    render_warning(&format!("no node '{id}' in the {domain} tree"), ctx.render)
                );
            }
        }),
        EditCommand::SetAll { domain, enabled } => coordinator.set_all(domain, enabled, now),
        EditCommand::Package(package_id) => ctx
            .packages()
            .require(package_id)
            .map(|_| start_load(coordinator, package_id, tx)),
        EditCommand::Show(domain) => {
            show(ctx, coordinator, domain);
            Ok(())
        }
        EditCommand::Quit => Ok(()),
    };

    if let Err(err) = result {
        let message = match err {
            RentvixError::NotReady => "no package is loaded; use `package <id>`".to_string(),
            other => other.to_string(),
        };
        eprint!("{}", render_warning(&message, ctx.render));
    }
}

fn show(ctx: &Context, coordinator: &SelectionCoordinator, domain: Option<TreeDomain>) {
    let domains: Vec<TreeDomain> = match domain {
        Some(d) => vec![d],
        None => TreeDomain::ALL.to_vec(),
    };
    if ctx.json {
        println!("{}", tree_json(coordinator, &domains));
        return;
    }
    print!("{}", summary(coordinator));
    for d in domains {
        print!("{}", render_domain(coordinator, d, ctx));
    }
}

fn summary(coordinator: &SelectionCoordinator) -> String {
    match coordinator.session() {
        Some(session) => render_summary(
            session.package_id(),
            session.counts(TreeDomain::Menu),
            session.counts(TreeDomain::Feature),
            session.has_unsaved_changes(),
        ),
        None => String::from("no package loaded\n"),
    }
}
