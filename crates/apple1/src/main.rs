//! Entry point: wires the CLI, loaders, hook table, debugger, and the main
//! instruction loop together (spec.md §2's "Control flow", §6's CLI surface).

use apple1::cli::{self, MemSize};
use apple1::debugger::{DebugState, Debugger};
use apple1::hooks::HookTable;
use apple1::input::{self, KeyAction};
use apple1::loader;
use apple1::symbols::SymbolTable;
use apple1::terminal::{CrosstermHost, Host, RawGuard};
use apple1::{EmuError, Machine};
use apple1::cassette::Cassette;

use cpu65::Cpu;
use cpu65::instruction::mos6502::Mos6502;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), EmuError> {
    let cli = cli::parse();
    let mem_size = cli::parse_mem(&cli.mem)?;
    let cassette_enabled = cli::parse_cassette(&cli.cassette)?;

    let mut machine = Machine::new(cli.baud, cli.cols);

    load_required_rom(&mut machine, "monitor.rom")?;
    if cassette_enabled {
        load_required_rom(&mut machine, "wozaci.rom")?;
    }

    for path in &cli.rom {
        info!("loading ROM file {path}");
        loader::load_text_file(Path::new(path), |addr, bytes| {
            machine.load(addr, bytes, true);
        })?;
    }
    for path in &cli.ram {
        info!("loading RAM file {path}");
        loader::load_text_file(Path::new(path), |addr, bytes| {
            machine.load(addr, bytes, false);
        })?;
    }

    let mut symbols = SymbolTable::new();
    for path in &cli.sym {
        info!("loading symbol file {path}");
        apple1::symbols::load_symbol_file(&mut symbols, Path::new(path))?;
    }

    if let MemSize::Limited { limit } = mem_size {
        for addr in limit..=0xFFFF {
            machine.mark_rom(addr as u16);
        }
    }

    let mut cpu: Cpu<Machine> = Cpu::with_instruction_set::<Mos6502>();
    cpu.reset(&mut machine);

    let hooks: HookTable<CrosstermHost> = if cassette_enabled {
        HookTable::with_cassette_hooks()
    } else {
        HookTable::new()
    };
    let mut cassette = Cassette::new();
    let mut debugger = Debugger::new(cli.debug);
    let mut host = CrosstermHost::new();
    let mut batch = BatchInput::default();

    let _raw_guard = RawGuard::acquire(&mut host)
        .map_err(|e| EmuError::Fatal(format!("unable to enable raw terminal mode: {e}")))?;

    main_loop(
        &mut cpu,
        &mut machine,
        &hooks,
        &mut cassette,
        &mut debugger,
        &mut host,
        &symbols,
        &mut batch,
    );

    Ok(())
}

fn load_required_rom(machine: &mut Machine, name: &str) -> Result<(), EmuError> {
    let path = loader::rom_search_path(name)
        .ok_or_else(|| EmuError::Fatal(format!("could not find required file {name}")))?;
    loader::load_text_file(&path, |addr, bytes| machine.load(addr, bytes, true))
}

/// Tracks the optional Ctrl-L batch-input file: while open, keystrokes are
/// served from it (LF→CR) instead of the terminal, until EOF (spec.md
/// SPEC_FULL.md, "Ctrl-L batch-input file").
#[derive(Default)]
struct BatchInput {
    reader: Option<BufReader<File>>,
}

impl BatchInput {
    fn next_byte(&mut self) -> Option<u8> {
        let reader = self.reader.as_mut()?;
        let mut buf = [0u8; 1];
        match std::io::Read::read(reader, &mut buf) {
            Ok(1) => Some(input::translate_batch_byte(buf[0])),
            _ => {
                self.reader = None;
                None
            }
        }
    }

    fn is_active(&self) -> bool {
        self.reader.is_some()
    }
}

fn prompt_batch_file<H: Host>(host: &mut H) -> Option<BufReader<File>> {
    let _ = host.set_raw(false);
    print!("Batch file to load (enter=cancel): ");
    let _ = std::io::stdout().flush();
    let line = host.read_line().unwrap_or_default();
    let result = if line.is_empty() {
        None
    } else {
        match File::open(&line) {
            Ok(f) => Some(BufReader::new(f)),
            Err(e) => {
                warn!("unable to open batch file {line}: {e}");
                None
            }
        }
    };
    let _ = host.set_raw(true);
    result
}

#[allow(clippy::too_many_arguments)]
fn main_loop<H: Host>(
    cpu: &mut Cpu<Machine>,
    machine: &mut Machine,
    hooks: &HookTable<H>,
    cassette: &mut Cassette,
    debugger: &mut Debugger,
    host: &mut H,
    symbols: &SymbolTable,
    batch: &mut BatchInput,
) {
    loop {
        if debugger.state() == DebugState::Paused {
            debugger.print_status(cpu, machine);
            print!("> ");
            let _ = std::io::stdout().flush();
            let Ok(line) = host.read_line() else {
                break;
            };
            debugger.handle_command(&line, cpu, machine, symbols);
            if debugger.state() == DebugState::Paused {
                // A pure query/step command (or `s`, which already stepped):
                // reprompt without also falling through to the step below.
                continue;
            }
        }

        let pc = u16::from(cpu.pc);
        hooks.dispatch(pc, cpu, machine, cassette, host);
        debug!("step pc={pc:04x}");
        cpu.step(machine);

        debugger.check_breakpoint(cpu, machine);

        drain_keyboard(machine, host, debugger, cpu, batch);

        machine.tick_throttle();

        if let Some(output) = drain_output(machine) {
            print!("{output}");
            let _ = std::io::stdout().flush();
        }
    }
}

fn drain_output(machine: &mut Machine) -> Option<String> {
    if machine.output.is_empty() {
        return None;
    }
    let text = String::from_utf8_lossy(&machine.output).into_owned();
    machine.output.clear();
    Some(text)
}

fn drain_keyboard<H: Host>(
    machine: &mut Machine,
    host: &mut H,
    debugger: &mut Debugger,
    cpu: &mut Cpu<Machine>,
    batch: &mut BatchInput,
) {
    if machine.has_pending_key() {
        return;
    }

    if batch.is_active() {
        if let Some(byte) = batch.next_byte() {
            machine.push_key(byte);
        }
        return;
    }

    let Some(byte) = host.poll_key() else {
        return;
    };

    match input::translate(byte) {
        KeyAction::Push(b) => {
            machine.push_key(b);
        }
        KeyAction::Exit => {
            let _ = host.set_raw(false);
            std::process::exit(0);
        }
        KeyAction::EnterDebugger => {
            debugger.activate();
        }
        KeyAction::Reset => {
            cpu.reset(machine);
        }
        KeyAction::LoadBatchFile => {
            batch.reader = prompt_batch_file(host);
        }
    }
}
