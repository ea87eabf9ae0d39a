//! The original MOS 6502 instruction set implementation.

use crate::instruction::{Instruction, InstructionSet, InstructionTable};
use crate::processor::addressing_mode::{
    Absolute, AbsoluteIndirect, AbsoluteX, AbsoluteY, AddressingMode, Immediate, ZeroPage,
    ZeroPageIndirectY, ZeroPageX, ZeroPageXIndirect, ZeroPageY,
};
use crate::processor::flags::Flags;
use crate::{Cpu, IRQ_VECTOR_HI, IRQ_VECTOR_LO, RunState};
use core65::{AccessType, Bus, Byte, Nibble};
use core65::{byte, word};

pub struct Mos6502;

impl Mos6502 {
    #[must_use]
    pub const fn base_table<B: Bus + 'static>() -> InstructionTable<B> {
        InstructionTable([
            // 0x00
            Instruction {
                cycles: 7,
                execute: brk::<B>,
            },
            // 0x01
            Instruction {
                cycles: 6,
                execute: ora::<ZeroPageXIndirect, B>,
            },
            // 0x02
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x03
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x04
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x05
            Instruction {
                cycles: 3,
                execute: ora::<ZeroPage, B>,
            },
            // 0x06
            Instruction {
                cycles: 5,
                execute: asl::<ZeroPage, B>,
            },
            // 0x07
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x08
            Instruction {
                cycles: 3,
                execute: php::<B>,
            },
            // 0x09
            Instruction {
                cycles: 2,
                execute: ora::<Immediate, B>,
            },
            // 0x0A
            Instruction {
                cycles: 2,
                execute: asl_a::<B>,
            },
            // 0x0B
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x0C
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x0D
            Instruction {
                cycles: 4,
                execute: ora::<Absolute, B>,
            },
            // 0x0E
            Instruction {
                cycles: 6,
                execute: asl::<Absolute, B>,
            },
            // 0x0F
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x10
            Instruction {
                cycles: 2,
                execute: bpl::<B>,
            },
            // 0x11
            Instruction {
                cycles: 5,
                execute: ora::<ZeroPageIndirectY, B>,
            },
            // 0x12
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x13
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x14
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x15
            Instruction {
                cycles: 4,
                execute: ora::<ZeroPageX, B>,
            },
            // 0x16
            Instruction {
                cycles: 6,
                execute: asl::<ZeroPageX, B>,
            },
            // 0x17
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x18
            Instruction {
                cycles: 2,
                execute: clc::<B>,
            },
            // 0x19
            Instruction {
                cycles: 4,
                execute: ora::<AbsoluteY, B>,
            },
            // 0x1A
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x1B
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x1C
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x1D
            Instruction {
                cycles: 4,
                execute: ora::<AbsoluteX, B>,
            },
            // 0x1E
            Instruction {
                cycles: 7,
                execute: asl::<AbsoluteX, B>,
            },
            // 0x1F
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x20
            Instruction {
                cycles: 6,
                execute: jsr::<Absolute, B>,
            },
            // 0x21
            Instruction {
                cycles: 6,
                execute: and::<ZeroPageXIndirect, B>,
            },
            // 0x22
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x23
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x24
            Instruction {
                cycles: 3,
                execute: bit::<ZeroPage, B>,
            },
            // 0x25
            Instruction {
                cycles: 3,
                execute: and::<ZeroPage, B>,
            },
            // 0x26
            Instruction {
                cycles: 5,
                execute: rol::<ZeroPage, B>,
            },
            // 0x27
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x28
            Instruction {
                cycles: 4,
                execute: plp::<B>,
            },
            // 0x29
            Instruction {
                cycles: 2,
                execute: and::<Immediate, B>,
            },
            // 0x2A
            Instruction {
                cycles: 2,
                execute: rol_a::<B>,
            },
            // 0x2B
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x2C
            Instruction {
                cycles: 4,
                execute: bit::<Absolute, B>,
            },
            // 0x2D
            Instruction {
                cycles: 4,
                execute: and::<Absolute, B>,
            },
            // 0x2E
            Instruction {
                cycles: 6,
                execute: rol::<Absolute, B>,
            },
            // 0x2F
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x30
            Instruction {
                cycles: 2,
                execute: bmi::<B>,
            },
            // 0x31
            Instruction {
                cycles: 5,
                execute: and::<ZeroPageIndirectY, B>,
            },
            // 0x32
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x33
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x34
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x35
            Instruction {
                cycles: 4,
                execute: and::<ZeroPageX, B>,
            },
            // 0x36
            Instruction {
                cycles: 6,
                execute: rol::<ZeroPageX, B>,
            },
            // 0x37
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x38
            Instruction {
                cycles: 2,
                execute: sec::<B>,
            },
            // 0x39
            Instruction {
                cycles: 4,
                execute: and::<AbsoluteY, B>,
            },
            // 0x3A
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x3B
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x3C
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x3D
            Instruction {
                cycles: 4,
                execute: and::<AbsoluteX, B>,
            },
            // 0x3E
            Instruction {
                cycles: 7,
                execute: rol::<AbsoluteX, B>,
            },
            // 0x3F
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x40
            Instruction {
                cycles: 6,
                execute: rti::<B>,
            },
            // 0x41
            Instruction {
                cycles: 6,
                execute: eor::<ZeroPageXIndirect, B>,
            },
            // 0x42
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x43
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x44
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x45
            Instruction {
                cycles: 3,
                execute: eor::<ZeroPage, B>,
            },
            // 0x46
            Instruction {
                cycles: 5,
                execute: lsr::<ZeroPage, B>,
            },
            // 0x47
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x48
            Instruction {
                cycles: 3,
                execute: pha::<B>,
            },
            // 0x49
            Instruction {
                cycles: 2,
                execute: eor::<Immediate, B>,
            },
            // 0x4A
            Instruction {
                cycles: 2,
                execute: lsr_a::<B>,
            },
            // 0x4B
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x4C
            Instruction {
                cycles: 3,
                execute: jmp::<Absolute, B>,
            },
            // 0x4D
            Instruction {
                cycles: 4,
                execute: eor::<Absolute, B>,
            },
            // 0x4E
            Instruction {
                cycles: 6,
                execute: lsr::<Absolute, B>,
            },
            // 0x4F
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x50
            Instruction {
                cycles: 2,
                execute: bvc::<B>,
            },
            // 0x51
            Instruction {
                cycles: 5,
                execute: eor::<ZeroPageIndirectY, B>,
            },
            // 0x52
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x53
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x54
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x55
            Instruction {
                cycles: 4,
                execute: eor::<ZeroPageX, B>,
            },
            // 0x56
            Instruction {
                cycles: 6,
                execute: lsr::<ZeroPageX, B>,
            },
            // 0x57
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x58
            Instruction {
                cycles: 2,
                execute: cli::<B>,
            },
            // 0x59
            Instruction {
                cycles: 4,
                execute: eor::<AbsoluteY, B>,
            },
            // 0x5A
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x5B
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x5C
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x5D
            Instruction {
                cycles: 4,
                execute: eor::<AbsoluteX, B>,
            },
            // 0x5E
            Instruction {
                cycles: 7,
                execute: lsr::<AbsoluteX, B>,
            },
            // 0x5F
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x60
            Instruction {
                cycles: 6,
                execute: rts::<B>,
            },
            // 0x61
            Instruction {
                cycles: 6,
                execute: adc::<Mos6502, ZeroPageXIndirect, B>,
            },
            // 0x62
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x63
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x64
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x65
            Instruction {
                cycles: 3,
                execute: adc::<Mos6502, ZeroPage, B>,
            },
            // 0x66
            Instruction {
                cycles: 5,
                execute: ror::<ZeroPage, B>,
            },
            // 0x67
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x68
            Instruction {
                cycles: 4,
                execute: pla::<B>,
            },
            // 0x69
            Instruction {
                cycles: 2,
                execute: adc::<Mos6502, Immediate, B>,
            },
            // 0x6A
            Instruction {
                cycles: 2,
                execute: ror_a::<B>,
            },
            // 0x6B
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x6C
            Instruction {
                cycles: 5,
                execute: jmp::<AbsoluteIndirect, B>,
            },
            // 0x6D
            Instruction {
                cycles: 4,
                execute: adc::<Mos6502, Absolute, B>,
            },
            // 0x6E
            Instruction {
                cycles: 6,
                execute: ror::<Absolute, B>,
            },
            // 0x6F
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x70
            Instruction {
                cycles: 2,
                execute: bvs::<B>,
            },
            // 0x71
            Instruction {
                cycles: 5,
                execute: adc::<Mos6502, ZeroPageIndirectY, B>,
            },
            // 0x72
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x73
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x74
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x75
            Instruction {
                cycles: 4,
                execute: adc::<Mos6502, ZeroPageX, B>,
            },
            // 0x76
            Instruction {
                cycles: 6,
                execute: ror::<ZeroPageX, B>,
            },
            // 0x77
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x78
            Instruction {
                cycles: 2,
                execute: sei::<B>,
            },
            // 0x79
            Instruction {
                cycles: 4,
                execute: adc::<Mos6502, AbsoluteY, B>,
            },
            // 0x7A
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x7B
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x7C
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x7D
            Instruction {
                cycles: 4,
                execute: adc::<Mos6502, AbsoluteX, B>,
            },
            // 0x7E
            Instruction {
                cycles: 7,
                execute: ror::<AbsoluteX, B>,
            },
            // 0x7F
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x80
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x81
            Instruction {
                cycles: 6,
                execute: sta::<ZeroPageXIndirect, B>,
            },
            // 0x82
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x83
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x84
            Instruction {
                cycles: 3,
                execute: sty::<ZeroPage, B>,
            },
            // 0x85
            Instruction {
                cycles: 3,
                execute: sta::<ZeroPage, B>,
            },
            // 0x86
            Instruction {
                cycles: 3,
                execute: stx::<ZeroPage, B>,
            },
            // 0x87
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x88
            Instruction {
                cycles: 2,
                execute: dey::<B>,
            },
            // 0x89
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x8A
            Instruction {
                cycles: 2,
                execute: txa::<B>,
            },
            // 0x8B
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x8C
            Instruction {
                cycles: 4,
                execute: sty::<Absolute, B>,
            },
            // 0x8D
            Instruction {
                cycles: 4,
                execute: sta::<Absolute, B>,
            },
            // 0x8E
            Instruction {
                cycles: 4,
                execute: stx::<Absolute, B>,
            },
            // 0x8F
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x90
            Instruction {
                cycles: 2,
                execute: bcc::<B>,
            },
            // 0x91
            Instruction {
                cycles: 6,
                execute: sta::<ZeroPageIndirectY, B>,
            },
            // 0x92
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x93
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x94
            Instruction {
                cycles: 4,
                execute: sty::<ZeroPageX, B>,
            },
            // 0x95
            Instruction {
                cycles: 4,
                execute: sta::<ZeroPageX, B>,
            },
            // 0x96
            Instruction {
                cycles: 4,
                execute: stx::<ZeroPageY, B>,
            },
            // 0x97
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x98
            Instruction {
                cycles: 2,
                execute: tya::<B>,
            },
            // 0x99
            Instruction {
                cycles: 5,
                execute: sta::<AbsoluteY, B>,
            },
            // 0x9A
            Instruction {
                cycles: 2,
                execute: txs::<B>,
            },
            // 0x9B
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x9C
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x9D
            Instruction {
                cycles: 5,
                execute: sta::<AbsoluteX, B>,
            },
            // 0x9E
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0x9F
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xA0
            Instruction {
                cycles: 2,
                execute: ldy::<Immediate, B>,
            },
            // 0xA1
            Instruction {
                cycles: 6,
                execute: lda::<ZeroPageXIndirect, B>,
            },
            // 0xA2
            Instruction {
                cycles: 2,
                execute: ldx::<Immediate, B>,
            },
            // 0xA3
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xA4
            Instruction {
                cycles: 3,
                execute: ldy::<ZeroPage, B>,
            },
            // 0xA5
            Instruction {
                cycles: 3,
                execute: lda::<ZeroPage, B>,
            },
            // 0xA6
            Instruction {
                cycles: 3,
                execute: ldx::<ZeroPage, B>,
            },
            // 0xA7
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xA8
            Instruction {
                cycles: 2,
                execute: tay::<B>,
            },
            // 0xA9
            Instruction {
                cycles: 2,
                execute: lda::<Immediate, B>,
            },
            // 0xAA
            Instruction {
                cycles: 2,
                execute: tax::<B>,
            },
            // 0xAB
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xAC
            Instruction {
                cycles: 4,
                execute: ldy::<Absolute, B>,
            },
            // 0xAD
            Instruction {
                cycles: 4,
                execute: lda::<Absolute, B>,
            },
            // 0xAE
            Instruction {
                cycles: 4,
                execute: ldx::<Absolute, B>,
            },
            // 0xAF
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xB0
            Instruction {
                cycles: 2,
                execute: bcs::<B>,
            },
            // 0xB1
            Instruction {
                cycles: 5,
                execute: lda::<ZeroPageIndirectY, B>,
            },
            // 0xB2
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xB3
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xB4
            Instruction {
                cycles: 4,
                execute: ldy::<ZeroPageX, B>,
            },
            // 0xB5
            Instruction {
                cycles: 4,
                execute: lda::<ZeroPageX, B>,
            },
            // 0xB6
            Instruction {
                cycles: 4,
                execute: ldx::<ZeroPageY, B>,
            },
            // 0xB7
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xB8
            Instruction {
                cycles: 2,
                execute: clv::<B>,
            },
            // 0xB9
            Instruction {
                cycles: 4,
                execute: lda::<AbsoluteY, B>,
            },
            // 0xBA
            Instruction {
                cycles: 2,
                execute: tsx::<B>,
            },
            // 0xBB
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xBC
            Instruction {
                cycles: 4,
                execute: ldy::<AbsoluteX, B>,
            },
            // 0xBD
            Instruction {
                cycles: 4,
                execute: lda::<AbsoluteX, B>,
            },
            // 0xBE
            Instruction {
                cycles: 4,
                execute: ldx::<AbsoluteY, B>,
            },
            // 0xBF
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xC0
            Instruction {
                cycles: 2,
                execute: cpy::<Immediate, B>,
            },
            // 0xC1
            Instruction {
                cycles: 6,
                execute: cmp::<ZeroPageXIndirect, B>,
            },
            // 0xC2
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xC3
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xC4
            Instruction {
                cycles: 3,
                execute: cpy::<ZeroPage, B>,
            },
            // 0xC5
            Instruction {
                cycles: 3,
                execute: cmp::<ZeroPage, B>,
            },
            // 0xC6
            Instruction {
                cycles: 5,
                execute: dec::<ZeroPage, B>,
            },
            // 0xC7
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xC8
            Instruction {
                cycles: 2,
                execute: iny::<B>,
            },
            // 0xC9
            Instruction {
                cycles: 2,
                execute: cmp::<Immediate, B>,
            },
            // 0xCA
            Instruction {
                cycles: 2,
                execute: dex::<B>,
            },
            // 0xCB
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xCC
            Instruction {
                cycles: 4,
                execute: cpy::<Absolute, B>,
            },
            // 0xCD
            Instruction {
                cycles: 4,
                execute: cmp::<Absolute, B>,
            },
            // 0xCE
            Instruction {
                cycles: 6,
                execute: dec::<Absolute, B>,
            },
            // 0xCF
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xD0
            Instruction {
                cycles: 2,
                execute: bne::<B>,
            },
            // 0xD1
            Instruction {
                cycles: 5,
                execute: cmp::<ZeroPageIndirectY, B>,
            },
            // 0xD2
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xD3
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xD4
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xD5
            Instruction {
                cycles: 4,
                execute: cmp::<ZeroPageX, B>,
            },
            // 0xD6
            Instruction {
                cycles: 6,
                execute: dec::<ZeroPageX, B>,
            },
            // 0xD7
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xD8
            Instruction {
                cycles: 2,
                execute: cld::<B>,
            },
            // 0xD9
            Instruction {
                cycles: 4,
                execute: cmp::<AbsoluteY, B>,
            },
            // 0xDA
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xDB
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xDC
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xDD
            Instruction {
                cycles: 4,
                execute: cmp::<AbsoluteX, B>,
            },
            // 0xDE
            Instruction {
                cycles: 7,
                execute: dec::<AbsoluteX, B>,
            },
            // 0xDF
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xE0
            Instruction {
                cycles: 2,
                execute: cpx::<Immediate, B>,
            },
            // 0xE1
            Instruction {
                cycles: 6,
                execute: sbc::<Mos6502, ZeroPageXIndirect, B>,
            },
            // 0xE2
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xE3
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xE4
            Instruction {
                cycles: 3,
                execute: cpx::<ZeroPage, B>,
            },
            // 0xE5
            Instruction {
                cycles: 3,
                execute: sbc::<Mos6502, ZeroPage, B>,
            },
            // 0xE6
            Instruction {
                cycles: 5,
                execute: inc::<ZeroPage, B>,
            },
            // 0xE7
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xE8
            Instruction {
                cycles: 2,
                execute: inx::<B>,
            },
            // 0xE9
            Instruction {
                cycles: 2,
                execute: sbc::<Mos6502, Immediate, B>,
            },
            // 0xEA
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xEB (undocumented SBC #imm alias; not part of the legal NMOS set, decoded as NOP)
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xEC
            Instruction {
                cycles: 4,
                execute: cpx::<Absolute, B>,
            },
            // 0xED
            Instruction {
                cycles: 4,
                execute: sbc::<Mos6502, Absolute, B>,
            },
            // 0xEE
            Instruction {
                cycles: 6,
                execute: inc::<Absolute, B>,
            },
            // 0xEF
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xF0
            Instruction {
                cycles: 2,
                execute: beq::<B>,
            },
            // 0xF1
            Instruction {
                cycles: 5,
                execute: sbc::<Mos6502, ZeroPageIndirectY, B>,
            },
            // 0xF2
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xF3
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xF4
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xF5
            Instruction {
                cycles: 4,
                execute: sbc::<Mos6502, ZeroPageX, B>,
            },
            // 0xF6
            Instruction {
                cycles: 6,
                execute: inc::<ZeroPageX, B>,
            },
            // 0xF7
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xF8
            Instruction {
                cycles: 2,
                execute: sed::<B>,
            },
            // 0xF9
            Instruction {
                cycles: 4,
                execute: sbc::<Mos6502, AbsoluteY, B>,
            },
            // 0xFA
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xFB
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xFC
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
            // 0xFD
            Instruction {
                cycles: 4,
                execute: sbc::<Mos6502, AbsoluteX, B>,
            },
            // 0xFE
            Instruction {
                cycles: 7,
                execute: inc::<AbsoluteX, B>,
            },
            // 0xFF
            Instruction {
                cycles: 2,
                execute: nop::<B>,
            },
        ])
    }
}

impl InstructionSet for Mos6502 {
    fn instruction_table<B: Bus + 'static>() -> InstructionTable<B> {
        Self::base_table()
    }
}

pub fn lda<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let val = bus.read(addr, AccessType::DataRead);
    cpu.a = val;
    cpu.p.set_zero(val == 0);
    cpu.p.set_signed(val.is_signed());
    cpu.pc += AM::BYTES;
}

pub fn ldx<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let val = bus.read(addr, AccessType::DataRead);
    cpu.x = val;
    cpu.p.set_zero(val == 0);
    cpu.p.set_signed(val.is_signed());
    cpu.pc += AM::BYTES;
}

pub fn ldy<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let val = bus.read(addr, AccessType::DataRead);
    cpu.y = val;
    cpu.p.set_zero(val == 0);
    cpu.p.set_signed(val.is_signed());
    cpu.pc += AM::BYTES;
}

pub fn sta<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    bus.write(addr, cpu.a, AccessType::DataWrite);
    cpu.pc += AM::BYTES;
}

pub fn stx<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    bus.write(addr, cpu.x, AccessType::DataWrite);
    cpu.pc += AM::BYTES;
}

pub fn sty<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    bus.write(addr, cpu.y, AccessType::DataWrite);
    cpu.pc += AM::BYTES;
}

pub fn tax<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.x = cpu.a;
    cpu.p.set_zero(cpu.x == 0);
    cpu.p.set_signed(cpu.x.is_signed());
    cpu.pc += 1;
}

pub fn tay<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.y = cpu.a;
    cpu.p.set_zero(cpu.y == 0);
    cpu.p.set_signed(cpu.y.is_signed());
    cpu.pc += 1;
}

pub fn tsx<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.x = cpu.sp;
    cpu.p.set_zero(cpu.x == 0);
    cpu.p.set_signed(cpu.x.is_signed());
    cpu.pc += 1;
}

pub fn txa<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.a = cpu.x;
    cpu.p.set_zero(cpu.a == 0);
    cpu.p.set_signed(cpu.a.is_signed());
    cpu.pc += 1;
}

pub fn txs<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.sp = cpu.x;
    cpu.pc += 1;
}

pub fn tya<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.a = cpu.y;
    cpu.p.set_zero(cpu.a == 0);
    cpu.p.set_signed(cpu.a.is_signed());
    cpu.pc += 1;
}

pub fn pha<B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    cpu.push(bus, cpu.a);
    cpu.pc += 1;
}

pub fn php<B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let bits = cpu.p | Flags::Break | Flags::Expansion;
    cpu.push(bus, byte!(bits));
    cpu.pc += 1;
}

pub fn pla<B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let val = cpu.pop(bus);
    cpu.a = val;
    cpu.p.set_zero(val == 0);
    cpu.p.set_signed(val.is_signed());
    cpu.pc += 1;
}

pub fn plp<B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let val = cpu.pop(bus) | Flags::Expansion;
    let masked = val & !Flags::Break;
    cpu.p = Flags::from_bits_truncate(u8::from(masked));
    cpu.pc += 1;
}

pub fn asl<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let mut val = bus.read(addr, AccessType::DataRead);

    cpu.p.set_carry(val & Flags::Sign != 0);
    val <<= 1;
    bus.write(addr, val, AccessType::DataWrite);
    cpu.p.set_zero(val == 0);
    cpu.p.set_signed(val.is_signed());
    cpu.pc += AM::BYTES;
}

pub fn asl_a<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.p.set_carry(cpu.a & Flags::Sign != 0);
    cpu.a <<= 1;
    cpu.p.set_zero(cpu.a == 0);
    cpu.p.set_signed(cpu.a.is_signed());
    cpu.pc += 1;
}

pub fn lsr<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let mut val = bus.read(addr, AccessType::DataRead);

    cpu.p.set_carry(val & Flags::Carry != 0);
    val >>= 1;
    bus.write(addr, val, AccessType::DataWrite);
    cpu.p.set_zero(val == 0);
    cpu.p.set_signed(val.is_signed());
    cpu.pc += AM::BYTES;
}

pub fn lsr_a<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.p.set_carry(cpu.a & Flags::Carry != 0);
    cpu.a >>= 1;
    cpu.p.set_zero(cpu.a == 0);
    cpu.p.set_signed(cpu.a.is_signed());
    cpu.pc += 1;
}

pub fn rol<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let val = bus.read(addr, AccessType::DataRead);
    let rotated = rotate_left(cpu, val);
    bus.write(addr, rotated, AccessType::DataWrite);
    cpu.pc += AM::BYTES;
}

pub fn rol_a<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.a = rotate_left(cpu, cpu.a);
    cpu.pc += 1;
}

pub fn ror<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let val = bus.read(addr, AccessType::DataRead);
    let rotated = rotate_right(cpu, val);
    bus.write(addr, rotated, AccessType::DataWrite);
    cpu.pc += AM::BYTES;
}

pub fn ror_a<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.a = rotate_right(cpu, cpu.a);
    cpu.pc += 1;
}

fn rotate_left<B: Bus + 'static>(cpu: &mut Cpu<B>, mut val: Byte) -> Byte {
    let old_carry = cpu.p.bit(Flags::Carry);
    cpu.p.set_carry(val & Flags::Sign != 0);
    val <<= 1;
    val |= old_carry;
    cpu.p.set_zero(val == Byte(0));
    cpu.p.set_signed(val.is_signed());
    val
}

fn rotate_right<B: Bus + 'static>(cpu: &mut Cpu<B>, mut val: Byte) -> Byte {
    let old_carry = (cpu.p.bit(Flags::Carry)) << 7;
    cpu.p.set_carry(val & Flags::Carry != 0);
    val >>= 1;
    val |= old_carry;
    cpu.p.set_zero(val == Byte(0));
    cpu.p.set_signed(val.is_signed());
    val
}

pub fn and<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let val = bus.read(addr, AccessType::DataRead);

    cpu.a &= val;
    cpu.p.set_zero(cpu.a == 0);
    cpu.p.set_signed(cpu.a.is_signed());

    cpu.pc += AM::BYTES;
}

pub fn bit<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let val = bus.read(addr, AccessType::DataRead);
    let test = val & cpu.a;

    cpu.p.set_zero(test == 0);
    cpu.p.set_signed(val.is_signed());
    cpu.p.set_overflow(val & Flags::Overflow != 0);

    cpu.pc += AM::BYTES;
}

pub fn eor<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let val = bus.read(addr, AccessType::DataRead);

    cpu.a ^= val;
    cpu.p.set_zero(cpu.a == 0);
    cpu.p.set_signed(cpu.a.is_signed());

    cpu.pc += AM::BYTES;
}

pub fn ora<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let val = bus.read(addr, AccessType::DataRead);

    cpu.a |= val;
    cpu.p.set_zero(cpu.a == 0);
    cpu.p.set_signed(cpu.a.is_signed());

    cpu.pc += AM::BYTES;
}

pub fn adc<S: InstructionSet, AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let value = bus.read(addr, AccessType::DataRead);
    add_with_carry::<S, _>(cpu, value);
    cpu.pc += AM::BYTES;
}

pub fn cmp<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let val = bus.read(addr, AccessType::DataRead);
    let (raw, overflow) = u8::from(cpu.a).overflowing_sub(u8::from(val));
    let result = byte!(raw);

    cpu.p.set_zero(result == Byte(0));
    cpu.p.set_signed(result.is_signed());
    cpu.p.set_carry(!overflow);

    cpu.pc += AM::BYTES;
}

pub fn cpx<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let val = bus.read(addr, AccessType::DataRead);
    let (raw, overflow) = u8::from(cpu.x).overflowing_sub(u8::from(val));
    let result = byte!(raw);

    cpu.p.set_zero(result == Byte(0));
    cpu.p.set_signed(result.is_signed());
    cpu.p.set_carry(!overflow);

    cpu.pc += AM::BYTES;
}

pub fn cpy<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let val = bus.read(addr, AccessType::DataRead);
    let (raw, overflow) = u8::from(cpu.y).overflowing_sub(u8::from(val));
    let result = byte!(raw);

    cpu.p.set_zero(result == Byte(0));
    cpu.p.set_signed(result.is_signed());
    cpu.p.set_carry(!overflow);

    cpu.pc += AM::BYTES;
}

pub fn sbc<S: InstructionSet, AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let value = bus.read(addr, AccessType::DataRead);
    sub_with_borrow::<S, _>(cpu, value);
    cpu.pc += AM::BYTES;
}

pub(crate) fn add_with_carry<S: InstructionSet, B: Bus + 'static>(cpu: &mut Cpu<B>, value: Byte) {
    let carry_in = u16::from(cpu.p.contains(Flags::Carry));
    let decimal = S::SUPPORTS_DECIMAL_MODE && cpu.p.contains(Flags::DecimalMode);

    let sum = u16::from(cpu.a) + u16::from(value) + carry_in;
    let mut result = byte!((sum & 0x00FF) as u8);

    cpu.p
        .set_overflow(((cpu.a ^ result) & (value ^ result) & Byte(0x80)) != Byte(0)); // overflow when operands had same sign but result differs

    if decimal {
        // In BCD mode each nibble represents a base-10 digit. Add the ones place
        // and manually correct if it overflowed past 9, then fold the carry into
        // the tens place and apply the same correction. Pack the resulting digits
        // back into a byte instead of relying on binary addition overflow.
        let mut lo = i16::from(cpu.a.lo()) + i16::from(value.lo()) + i16::from(carry_in as u8); // add ones digit
        let mut carry_10 = 0i16;
        if lo > 9 {
            lo -= 10;
            carry_10 = 1;
        }

        let mut hi = i16::from(cpu.a.hi()) + i16::from(value.hi()) + carry_10; // add tens digit
        let mut carry_out = false;
        if hi > 9 {
            hi -= 10;
            carry_out = true;
        }

        result = Byte::from((Nibble::from(lo as u8), Nibble::from(hi as u8)));
        cpu.p.set_carry(carry_out);
    } else {
        cpu.p.set_carry(sum > 0xFF);
    }

    cpu.p.set_zero(result == Byte(0));
    cpu.p.set_signed(result.is_signed());
    cpu.a = result;
}

pub(crate) fn sub_with_borrow<S: InstructionSet, B: Bus + 'static>(cpu: &mut Cpu<B>, value: Byte) {
    let carry_in = u16::from(cpu.p.contains(Flags::Carry));
    let decimal = S::SUPPORTS_DECIMAL_MODE && cpu.p.contains(Flags::DecimalMode);

    // subtract via addition of the complement
    let sum = u16::from(cpu.a) + (u16::from(value) ^ 0x00FF) + carry_in;
    let mut result = byte!((sum & 0x00FF) as u8);

    cpu.p
        .set_overflow(((cpu.a ^ result) & ((value ^ Byte(0xFF)) ^ result) & Byte(0x80)) != Byte(0)); // same-sign check adjusted for subtraction form

    if decimal {
        // Decimal subtraction is performed per digit. Subtract the low nibble,
        // borrowing from the high nibble when the result would go negative. Then
        // subtract the high nibble with the propagated borrow and re-pack the result.
        let borrow_lo = i16::from(carry_in != 1); // carry==1 means no borrow
        let a_lo = i16::from(cpu.a.lo());
        let b_lo = i16::from(value.lo());

        let (lo, borrow_hi) = if a_lo >= b_lo + borrow_lo {
            (a_lo - (b_lo + borrow_lo), 0i16)
        } else {
            (a_lo + 10 - (b_lo + borrow_lo), 1i16) // borrow 10 from tens digit
        };

        let a_hi = i16::from(cpu.a.hi());
        let b_hi = i16::from(value.hi());

        let (hi, carry_out) = if a_hi >= b_hi + borrow_hi {
            (a_hi - (b_hi + borrow_hi), true)
        } else {
            (a_hi + 10 - (b_hi + borrow_hi), false) // final borrow clears carry flag
        };

        result = Byte::from((Nibble::from(lo as u8), Nibble::from(hi as u8)));
        cpu.p.set_carry(carry_out);
    } else {
        cpu.p.set_carry(sum > 0xFF);
    }

    cpu.p.set_zero(result == Byte(0));
    cpu.p.set_signed(result.is_signed());
    cpu.a = result;
}

pub fn dec<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let val = bus.read(addr, AccessType::DataRead) - 1;
    bus.write(addr, val, AccessType::DataWrite);
    cpu.p.set_zero(val == 0);
    cpu.p.set_signed(val.is_signed());

    cpu.pc += AM::BYTES;
}

pub fn dex<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.x -= 1;
    cpu.p.set_zero(cpu.x == 0);
    cpu.p.set_signed(cpu.x.is_signed());

    cpu.pc += 1;
}

pub fn dey<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.y -= 1;
    cpu.p.set_zero(cpu.y == 0);
    cpu.p.set_signed(cpu.y.is_signed());
    cpu.pc += 1;
}

pub fn inc<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let val = bus.read(addr, AccessType::DataRead) + 1;
    bus.write(addr, val, AccessType::DataWrite);
    cpu.p.set_zero(val == 0);
    cpu.p.set_signed(val.is_signed());

    cpu.pc += AM::BYTES;
}

pub fn inx<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.x += 1;
    cpu.p.set_zero(cpu.x == 0);
    cpu.p.set_signed(cpu.x.is_signed());

    cpu.pc += 1;
}

pub fn iny<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.y += 1;
    cpu.p.set_zero(cpu.y == 0);
    cpu.p.set_signed(cpu.y.is_signed());

    cpu.pc += 1;
}

pub fn brk<B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let return_pc = word!(cpu.pc + 2);

    cpu.push(bus, return_pc.hi());
    cpu.push(bus, return_pc.lo());

    let bits = cpu.p | Flags::Break | Flags::Expansion;
    cpu.push(bus, byte!(bits));

    cpu.p.set_interrupt_disabled(true);

    let lo = bus.read(IRQ_VECTOR_LO, AccessType::InterruptVectorRead);
    let hi = bus.read(IRQ_VECTOR_HI, AccessType::InterruptVectorRead);
    cpu.pc = word!((lo, hi));
}

pub fn jmp<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    cpu.pc = AM::fetch_address(cpu, bus);
}

pub fn jsr<AM: AddressingMode, B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let addr = AM::fetch_address(cpu, bus);
    let return_addr = cpu.pc + (AM::BYTES - 1);

    cpu.push(bus, return_addr.hi());
    cpu.push(bus, return_addr.lo());

    cpu.pc = addr;
}

pub fn rti<B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let mut p = cpu.pop(bus);
    p |= Flags::Expansion; // force E to 1
    p &= !Flags::Break; // clear B
    cpu.p = p.into();

    let lo = cpu.pop(bus);
    let hi = cpu.pop(bus);
    cpu.pc = word!((lo, hi));
}

pub fn rts<B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let lo = cpu.pop(bus);
    let hi = cpu.pop(bus);
    cpu.pc = word!((lo, hi)) + 1;
}

pub fn bcc<B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let base = cpu.pc + 2;

    if cpu.p.contains(Flags::Carry) {
        cpu.pc = base;
        return;
    }

    let offset = i8::from(bus.read(cpu.pc + 1, AccessType::DataRead));
    let target = base + offset;
    cpu.cycles += 1;
    if cpu.crosses_page(base, target) {
        cpu.cycles += 1;
    }
    cpu.pc = target;
}

pub fn bcs<B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let base = cpu.pc + 2;

    if !cpu.p.contains(Flags::Carry) {
        cpu.pc = base;
        return;
    }

    let offset = i8::from(bus.read(cpu.pc + 1, AccessType::DataRead));
    let target = base + offset;
    cpu.cycles += 1;
    if cpu.crosses_page(base, target) {
        cpu.cycles += 1;
    }
    cpu.pc = target;
}

pub fn beq<B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let base = cpu.pc + 2;

    if !cpu.p.contains(Flags::Zero) {
        cpu.pc = base;
        return;
    }

    let offset = i8::from(bus.read(cpu.pc + 1, AccessType::DataRead));
    let target = base + offset;
    cpu.cycles += 1;
    if cpu.crosses_page(base, target) {
        cpu.cycles += 1;
    }
    cpu.pc = target;
}

pub fn bmi<B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let base = cpu.pc + 2;

    if !cpu.p.contains(Flags::Sign) {
        cpu.pc = base;
        return;
    }

    let offset = i8::from(bus.read(cpu.pc + 1, AccessType::DataRead));
    let target = base + offset;
    cpu.cycles += 1;
    if cpu.crosses_page(base, target) {
        cpu.cycles += 1;
    }
    cpu.pc = target;
}

pub fn bne<B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let base = cpu.pc + 2;

    if cpu.p.contains(Flags::Zero) {
        cpu.pc = base;
        return;
    }

    let offset = i8::from(bus.read(cpu.pc + 1, AccessType::DataRead));
    let target = base + offset;
    cpu.cycles += 1;
    if cpu.crosses_page(base, target) {
        cpu.cycles += 1;
    }
    cpu.pc = target;
}

pub fn bpl<B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let base = cpu.pc + 2;

    if cpu.p.contains(Flags::Sign) {
        cpu.pc = base;
        return;
    }

    let offset = i8::from(bus.read(cpu.pc + 1, AccessType::DataRead));
    let target = base + offset;
    cpu.cycles += 1;
    if cpu.crosses_page(base, target) {
        cpu.cycles += 1;
    }
    cpu.pc = target;
}

pub fn bvc<B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let base = cpu.pc + 2;

    if cpu.p.contains(Flags::Overflow) {
        cpu.pc = base;
        return;
    }

    let offset = i8::from(bus.read(cpu.pc + 1, AccessType::DataRead));
    let target = base + offset;
    cpu.cycles += 1;
    if cpu.crosses_page(base, target) {
        cpu.cycles += 1;
    }
    cpu.pc = target;
}

pub fn bvs<B: Bus + 'static>(cpu: &mut Cpu<B>, bus: &mut B) {
    let base = cpu.pc + 2;

    if !cpu.p.contains(Flags::Overflow) {
        cpu.pc = base;
        return;
    }

    let offset = i8::from(bus.read(cpu.pc + 1, AccessType::DataRead));
    let target = base + offset;
    cpu.cycles += 1;
    if cpu.crosses_page(base, target) {
        cpu.cycles += 1;
    }
    cpu.pc = target;
}

pub fn clc<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.p.set_carry(false);
    cpu.pc += 1;
}

pub fn cld<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.p.set_decimal_mode(false);
    cpu.pc += 1;
}

pub fn cli<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.p.set_interrupt_disabled(false);
    cpu.pc += 1;
}

pub fn clv<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.p.set_overflow(false);
    cpu.pc += 1;
}

pub fn sec<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.p.set_carry(true);
    cpu.pc += 1;
}

pub fn sed<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.p.set_decimal_mode(true);
    cpu.pc += 1;
}

pub fn sei<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.p.set_interrupt_disabled(true);
    cpu.pc += 1;
}

pub fn nop<B: Bus + 'static>(cpu: &mut Cpu<B>, _bus: &mut B) {
    cpu.pc += 1;
}
