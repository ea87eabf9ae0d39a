//! Hook table (spec component D): traps specific program-counter values
//! before instruction fetch and substitutes host-side semantic byte I/O for
//! the Apple-1 cassette ROM's bit-level protocol (spec.md §4.C).

use crate::cassette::Cassette;
use crate::machine::Machine;
use crate::terminal::Host;
use cpu65::Cpu;
use cpu65::word::Word;
use std::collections::HashMap;

/// Address of the SAVEINDEX zero-page cell the write/read entry hooks stash
/// `X` into, standing in for the WHEADER routine they skip (spec.md §4.C).
const SAVEINDEX: u16 = 0x0028;

/// One hook handler: runs to completion before the instruction at its
/// trigger PC would otherwise be decoded, and may rewrite any CPU register
/// or `PC` (spec.md §4.C).
pub type Handler<H> = fn(&mut Cpu<Machine>, &mut Machine, &mut Cassette, &mut H);

/// Sparse `PC -> handler` map; an empty table means free-running with no
/// per-step hook overhead (spec.md §9, "Hook dispatch").
pub struct HookTable<H: Host> {
    handlers: HashMap<u16, Handler<H>>,
}

impl<H: Host> HookTable<H> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Installs the six cassette traps from spec.md's §4.C table. Installed
    /// once, at construction time, when cassette emulation is enabled; never
    /// removed.
    #[must_use]
    pub fn with_cassette_hooks() -> Self {
        let mut table = Self::new();
        table.handlers.insert(0xC170, write_entry::<H>);
        table.handlers.insert(0xC17C, write_bit_loop::<H>);
        table.handlers.insert(0xC18D, read_entry::<H>);
        table.handlers.insert(0xC1A4, read_byte_loop::<H>);
        table.handlers.insert(0xC189, set_carry::<H>);
        table.handlers.insert(0xC163, close_cassette::<H>);
        table
    }

    /// Runs the hook registered at `pc`, if any.
    pub fn dispatch(
        &self,
        pc: u16,
        cpu: &mut Cpu<Machine>,
        bus: &mut Machine,
        cassette: &mut Cassette,
        host: &mut H,
    ) {
        if let Some(handler) = self.handlers.get(&pc) {
            handler(cpu, bus, cassette, host);
        }
    }
}

impl<H: Host> Default for HookTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// `$C170`, ACI write entry: stash `X`, prompt for an output file, and either
/// abort to `$C163` or continue at `$C175`.
fn write_entry<H: Host>(cpu: &mut Cpu<Machine>, bus: &mut Machine, cassette: &mut Cassette, host: &mut H) {
    bus.write(SAVEINDEX, u8::from(cpu.x), core65::AccessType::DataWrite);
    cassette.begin_write(host);
    cpu.pc = if cassette.is_open() {
        Word(0xC175)
    } else {
        Word(0xC163)
    };
}

/// `$C17C`, ACI write-bit loop: write `A` as one byte, skip to `$C182`.
fn write_bit_loop<H: Host>(cpu: &mut Cpu<Machine>, _bus: &mut Machine, cassette: &mut Cassette, _host: &mut H) {
    cassette.write_byte(u8::from(cpu.a));
    cpu.pc = Word(0xC182);
}

/// `$C18D`, ACI read entry: prompt for an input file; on abort jump to
/// `$C163`, else stash `X` and attempt the first byte read.
fn read_entry<H: Host>(cpu: &mut Cpu<Machine>, bus: &mut Machine, cassette: &mut Cassette, host: &mut H) {
    cassette.begin_read(host);
    if !cassette.is_open() {
        cpu.pc = Word(0xC163);
        return;
    }
    bus.write(SAVEINDEX, u8::from(cpu.x), core65::AccessType::DataWrite);
    read_one_byte(cpu, cassette);
}

/// `$C1A4`, ACI read-byte loop: same EOF-vs-success disposition as the entry
/// hook, without re-prompting for a file.
fn read_byte_loop<H: Host>(cpu: &mut Cpu<Machine>, _bus: &mut Machine, cassette: &mut Cassette, _host: &mut H) {
    read_one_byte(cpu, cassette);
}

fn read_one_byte(cpu: &mut Cpu<Machine>, cassette: &mut Cassette) {
    match cassette.read_byte() {
        Some(byte) => {
            cpu.a = byte.into();
            cpu.x = 0.into();
            cpu.pc = Word(0xC1B1);
        }
        None => {
            cpu.p.set_carry(true);
            cpu.pc = Word(0xC189);
        }
    }
}

/// `$C189`: ensures the carry flag is set on the error path after an intercept.
fn set_carry<H: Host>(cpu: &mut Cpu<Machine>, _bus: &mut Machine, _cassette: &mut Cassette, _host: &mut H) {
    cpu.p.set_carry(true);
}

/// `$C163`: closes the cassette file, ending the current read or write.
fn close_cassette<H: Host>(_cpu: &mut Cpu<Machine>, _bus: &mut Machine, cassette: &mut Cassette, _host: &mut H) {
    cassette.end();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::Host;
    use cpu65::processor::flags::Flags;

    struct NullHost;
    impl Host for NullHost {
        fn poll_key(&mut self) -> Option<u8> {
            None
        }
        fn read_line(&mut self) -> std::io::Result<String> {
            Ok(String::new())
        }
        fn set_raw(&mut self, _raw: bool) -> std::io::Result<()> {
            Ok(())
        }
        fn now(&self) -> u64 {
            0
        }
    }

    #[test]
    fn write_entry_aborts_to_c163_when_no_file_chosen() {
        let mut bus = Machine::new(0, 0);
        let mut cpu: Cpu<Machine> = Cpu::with_reset_vector::<cpu65::instruction::mos6502::Mos6502>(
            &mut bus,
            Word(0x0000),
        );
        let mut cassette = Cassette::new();
        let mut host = NullHost;
        write_entry(&mut cpu, &mut bus, &mut cassette, &mut host);
        assert_eq!(cpu.pc, Word(0xC163));
    }

    #[test]
    fn read_entry_sets_carry_on_end_of_medium_when_no_file_chosen() {
        let mut bus = Machine::new(0, 0);
        let mut cpu: Cpu<Machine> = Cpu::with_reset_vector::<cpu65::instruction::mos6502::Mos6502>(
            &mut bus,
            Word(0x0000),
        );
        let mut cassette = Cassette::new();
        let mut host = NullHost;
        read_entry(&mut cpu, &mut bus, &mut cassette, &mut host);
        assert_eq!(cpu.pc, Word(0xC163));
    }

    #[test]
    fn hook_table_dispatches_registered_pc() {
        let mut bus = Machine::new(0, 0);
        let mut cpu: Cpu<Machine> = Cpu::with_reset_vector::<cpu65::instruction::mos6502::Mos6502>(
            &mut bus,
            Word(0x0000),
        );
        cpu.p.set_carry(false);
        let mut cassette = Cassette::new();
        let mut host = NullHost;
        let table = HookTable::with_cassette_hooks();
        table.dispatch(0xC189, &mut cpu, &mut bus, &mut cassette, &mut host);
        assert!(cpu.p.contains(Flags::Carry));
    }

    #[test]
    fn hook_table_is_noop_for_unregistered_pc() {
        let mut bus = Machine::new(0, 0);
        let mut cpu: Cpu<Machine> = Cpu::with_reset_vector::<cpu65::instruction::mos6502::Mos6502>(
            &mut bus,
            Word(0x0000),
        );
        let mut cassette = Cassette::new();
        let mut host = NullHost;
        let table = HookTable::with_cassette_hooks();
        let pc_before = cpu.pc;
        table.dispatch(0x1234, &mut cpu, &mut bus, &mut cassette, &mut host);
        assert_eq!(cpu.pc, pc_before);
    }
}
