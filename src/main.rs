use std::{env, error::Error, fs, path::PathBuf};

use mos6502::cpu::{
    FLAG_BREAK, FLAG_CARRY, FLAG_DECIMAL, FLAG_INTERRUPT_DISABLE, FLAG_NEGATIVE, FLAG_OVERFLOW,
    FLAG_UNUSED, FLAG_ZERO,
};
use mos6502::emulator::Emulator;

/// Multiplies 10 by 3 into $0002, then parks on NOPs.
///
/// ```text
/// LDX #$0A
/// STX $00
/// LDX #$03
/// STX $01
/// LDY $00
/// LDA #$00
/// CLC
/// loop: ADC $01
/// DEY
/// BNE loop
/// STA $02
/// NOP
/// NOP
/// NOP
/// ```
const SAMPLE_PROGRAM: &[u8] = &[
    0xA2, 0x0A, 0x8E, 0x00, 0x00, 0xA2, 0x03, 0x8E, 0x01, 0x00, 0xAC, 0x00, 0x00, 0xA9, 0x00,
    0x18, 0x6D, 0x01, 0x00, 0x88, 0xD0, 0xFA, 0x8D, 0x02, 0x00, 0xEA, 0xEA, 0xEA,
];

const DEFAULT_LOAD_ADDR: u16 = 0x8000;
const DEFAULT_STEPS: usize = 64;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let mut program_path: Option<PathBuf> = None;
    let mut load_addr = DEFAULT_LOAD_ADDR;
    let mut steps = DEFAULT_STEPS;
    let mut save_state: Option<PathBuf> = None;
    let mut load_state: Option<PathBuf> = None;
    let mut show_disasm = true;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--load-addr" => {
                if let Some(value) = args.next() {
                    match parse_hex_u16(&value) {
                        Some(addr) => load_addr = addr,
                        None => {
                            eprintln!("invalid --load-addr value: {value}");
                            return Ok(());
                        }
                    }
                } else {
                    eprintln!("--load-addr requires an address");
                    return Ok(());
                }
            }
            "--steps" => {
                if let Some(value) = args.next() {
                    match value.parse::<usize>() {
                        Ok(count) => steps = count,
                        Err(_) => {
                            eprintln!("invalid --steps value: {value}");
                            return Ok(());
                        }
                    }
                } else {
                    eprintln!("--steps requires a value");
                    return Ok(());
                }
            }
            "--save-state" => {
                if let Some(path) = args.next() {
                    save_state = Some(PathBuf::from(path));
                } else {
                    eprintln!("--save-state requires a file path");
                    return Ok(());
                }
            }
            "--load-state" => {
                if let Some(path) = args.next() {
                    load_state = Some(PathBuf::from(path));
                } else {
                    eprintln!("--load-state requires a file path");
                    return Ok(());
                }
            }
            "--no-disasm" => show_disasm = false,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            _ if program_path.is_none() => program_path = Some(PathBuf::from(arg)),
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                return Ok(());
            }
        }
    }

    let mut emu = Emulator::new();

    if let Some(path) = load_state {
        emu.load_state_from_file(&path)?;
        println!("Resumed state from {}", path.display());
    } else {
        let program = match &program_path {
            Some(path) => fs::read(path)?,
            None => SAMPLE_PROGRAM.to_vec(),
        };
        if program.is_empty() {
            eprintln!("program is empty");
            return Ok(());
        }
        if program.len() > usize::from(u16::MAX) + 1 {
            eprintln!("program does not fit in the 64 KiB address space");
            return Ok(());
        }

        emu.load_program(load_addr, &program);

        if show_disasm {
            let end = load_addr.wrapping_add((program.len() - 1) as u16);
            for (addr, line) in emu.disassemble(load_addr, end) {
                println!("${:04X}: {}", addr, line);
            }
            println!();
        }

        emu.reset();
    }

    emu.run_instructions(steps);

    print_cpu_state(&emu);
    print_zero_page(&emu);

    if let Some(path) = save_state {
        emu.save_state_to_file(&path)?;
        println!("Saved state to {}", path.display());
    }

    Ok(())
}

fn parse_hex_u16(value: &str) -> Option<u16> {
    let digits = value
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .trim_start_matches('$');
    u16::from_str_radix(digits, 16).ok()
}

fn print_cpu_state(emu: &Emulator) {
    let cpu = &emu.cpu;
    println!(
        "PC:{:04X}  A:{:02X} X:{:02X} Y:{:02X} SP:{:02X}  CYC:{}",
        cpu.pc,
        cpu.a,
        cpu.x,
        cpu.y,
        cpu.sp,
        emu.cycles()
    );
    println!(
        "Status: {}{}{}{}{}{}{}{}  (${:02X})",
        if cpu.flag(FLAG_NEGATIVE) { 'N' } else { 'n' },
        if cpu.flag(FLAG_OVERFLOW) { 'V' } else { 'v' },
        if cpu.flag(FLAG_UNUSED) { 'U' } else { 'u' },
        if cpu.flag(FLAG_BREAK) { 'B' } else { 'b' },
        if cpu.flag(FLAG_DECIMAL) { 'D' } else { 'd' },
        if cpu.flag(FLAG_INTERRUPT_DISABLE) { 'I' } else { 'i' },
        if cpu.flag(FLAG_ZERO) { 'Z' } else { 'z' },
        if cpu.flag(FLAG_CARRY) { 'C' } else { 'c' },
        cpu.status,
    );
}

fn print_zero_page(emu: &Emulator) {
    println!("\nZero page:");
    for base in (0x0000u16..0x0040).step_by(16) {
        print!("  {:04X}:", base);
        for i in 0..16u16 {
            print!(" {:02X}", emu.bus.read(base + i));
        }
        println!();
    }
}

fn print_usage() {
    println!("Usage: mos6502 [program.bin] [options]");
    println!();
    println!("Runs a raw 6502 machine-code image, or a built-in sample program");
    println!("when no image is given.");
    println!();
    println!("Options:");
    println!("  --load-addr ADDR   where to place the program (hex, default 8000)");
    println!("  --steps N          instructions to execute (default {DEFAULT_STEPS})");
    println!("  --save-state FILE  snapshot the machine after the run");
    println!("  --load-state FILE  resume a snapshot instead of loading a program");
    println!("  --no-disasm        skip the program listing");
    println!("  -h, --help         show this help");
}
