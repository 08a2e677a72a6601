use std::{
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidHexDigit(char),
    OutOfBits,
    InvalidTypeId(u8),
    NoOperand,
    WrongOperandCount(u8, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidHexDigit(c) => write!(f, "Invalid hexadecimal digit({}).", c),
            Error::OutOfBits => write!(f, "Expect more bits in transmission, given none."),
            Error::InvalidTypeId(id) => write!(f, "Invalid packet type id({}).", id),
            Error::NoOperand => write!(f, "Expect at least one operand packet, given none."),
            Error::WrongOperandCount(type_id, operand_n) => write!(
                f,
                "Expect two operand packets for type id({}), given {}.",
                type_id, operand_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub enum PacketBody {
    Literal(u64),
    Operator(Vec<Packet>),
}

#[derive(Debug)]
pub struct Packet {
    version: u8,
    type_id: u8,
    body: PacketBody,
}

impl Packet {
    pub fn version_sum(&self) -> u32 {
        u32::from(self.version)
            + match &self.body {
                PacketBody::Literal(_) => 0,
                PacketBody::Operator(operands) => {
                    operands.iter().map(Packet::version_sum).sum()
                }
            }
    }

    pub fn eval(&self) -> Result<u64, Error> {
        let operands = match &self.body {
            PacketBody::Literal(value) => return Ok(*value),
            PacketBody::Operator(operands) => operands,
        };
        let mut values = operands.iter().map(Packet::eval);
        match self.type_id {
            0 => values.sum(),
            1 => values.product(),
            2 => {
                if operands.is_empty() {
                    return Err(Error::NoOperand);
                }

                values.try_fold(u64::MAX, |min, v| v.map(|v| min.min(v)))
            }
            3 => {
                if operands.is_empty() {
                    return Err(Error::NoOperand);
                }

                values.try_fold(u64::MIN, |max, v| v.map(|v| max.max(v)))
            }
            5 | 6 | 7 => {
                if operands.len() != 2 {
                    return Err(Error::WrongOperandCount(self.type_id, operands.len()));
                }

                let left = operands[0].eval()?;
                let right = operands[1].eval()?;
                Ok(u64::from(match self.type_id {
                    5 => left > right,
                    6 => left < right,
                    _ => left == right,
                }))
            }
            other => Err(Error::InvalidTypeId(other)),
        }
    }
}

struct BitReader {
    bits: Vec<bool>,
    position: usize,
}

impl BitReader {
    fn from_hex(text: &str) -> Result<Self, Error> {
        let mut bits = Vec::with_capacity(text.len() * 4);
        for c in text.chars() {
            let value = c.to_digit(16).ok_or(Error::InvalidHexDigit(c))?;
            for shift in (0..4).rev() {
                bits.push(value & (1 << shift) != 0);
            }
        }

        Ok(BitReader { bits, position: 0 })
    }

    fn take(&mut self, bit_n: usize) -> Result<u64, Error> {
        if self.position + bit_n > self.bits.len() {
            return Err(Error::OutOfBits);
        }

        let mut value = 0;
        for _ in 0..bit_n {
            value = value << 1 | u64::from(self.bits[self.position]);
            self.position += 1;
        }

        Ok(value)
    }

    fn read_packet(&mut self) -> Result<Packet, Error> {
        let version = self.take(3)? as u8;
        let type_id = self.take(3)? as u8;
        let body = if type_id == 4 {
            let mut value = 0u64;
            loop {
                let group = self.take(5)?;
                value = value << 4 | (group & 0xf);
                if group & 0x10 == 0 {
                    break;
                }
            }

            PacketBody::Literal(value)
        } else {
            let mut operands = Vec::new();
            if self.take(1)? == 0 {
                let length = self.take(15)? as usize;
                let end = self.position + length;
                while self.position < end {
                    operands.push(self.read_packet()?);
                }
            } else {
                let operand_n = self.take(11)? as usize;
                for _ in 0..operand_n {
                    operands.push(self.read_packet()?);
                }
            }

            PacketBody::Operator(operands)
        };

        Ok(Packet {
            version,
            type_id,
            body,
        })
    }
}

pub fn parse_packet(text: &str) -> Result<Packet, Error> {
    BitReader::from_hex(text.trim())?.read_packet()
}

pub fn read_packet<P: AsRef<Path>>(path: P) -> Result<Packet> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;
    parse_packet(&text)
        .with_context(|| format!("Failed to parse packet from given file({}).", path.as_ref().display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_sum_counts_nested_packets() {
        assert_eq!(parse_packet("8A004A801A8002F478").unwrap().version_sum(), 16);
        assert_eq!(
            parse_packet("620080001611562C8802118E34").unwrap().version_sum(),
            12
        );
        assert_eq!(
            parse_packet("C0015000016115A2E0802F182340")
                .unwrap()
                .version_sum(),
            23
        );
    }

    #[test]
    fn eval_applies_operator_types() {
        assert_eq!(parse_packet("C200B40A82").unwrap().eval().unwrap(), 3);
        assert_eq!(parse_packet("04005AC33890").unwrap().eval().unwrap(), 54);
        assert_eq!(parse_packet("880086C3E88112").unwrap().eval().unwrap(), 7);
        assert_eq!(parse_packet("CE00C43D881120").unwrap().eval().unwrap(), 9);
        assert_eq!(parse_packet("D8005AC2A8F0").unwrap().eval().unwrap(), 1);
        assert_eq!(parse_packet("F600BC2D8F").unwrap().eval().unwrap(), 0);
        assert_eq!(parse_packet("9C005AC2F8F0").unwrap().eval().unwrap(), 0);
    }

    #[test]
    fn literal_packet_keeps_its_value() {
        let packet = parse_packet("D2FE28").unwrap();
        match packet.body {
            PacketBody::Literal(value) => assert_eq!(value, 2021),
            other => panic!("Expect literal packet, given {:?}.", other),
        }
    }
}
