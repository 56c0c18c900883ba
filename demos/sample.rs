use bitspan::{BitAccess, BitCursor, ReadError};
use std::io::Read;

// 20 byte IPv4 header used when nothing is piped in
const SAMPLE: [u8; 20] = [
    0x45, 0x00, 0x00, 0x54, 0x1c, 0x46, 0x40, 0x00, 0x40, 0x01, 0xa0, 0x6b, 0xc0, 0xa8, 0x00,
    0x68, 0xc0, 0xa8, 0x00, 0x01,
];

#[derive(Debug)]
struct Ipv4Header {
    version: u8,
    ihl: u8,
    dscp: u8,
    ecn: u8,
    total_length: u16,
    identification: u16,
    dont_fragment: bool,
    more_fragments: bool,
    fragment_offset: u16,
    ttl: u8,
    protocol: u8,
    checksum: String,
    source: [u8; 4],
    destination: [u8; 4],
}

fn field(bits: Vec<u8>, width: u32) -> u16 {
    let mut buf = [0u8; 2];
    buf[..bits.len()].copy_from_slice(&bits);
    u16::from_be_bytes(buf) >> (16 - width)
}

fn read_data(data: &[u8]) -> Result<Ipv4Header, ReadError> {
    let mut bits = BitCursor::new(data);
    let version = field(bits.read_bits(4)?, 4) as u8;
    let ihl = field(bits.read_bits(4)?, 4) as u8;
    let dscp = field(bits.read_bits(6)?, 6) as u8;
    let ecn = field(bits.read_bits(2)?, 2) as u8;
    let total_length = bits.read_u16()?;
    let identification = bits.read_u16()?;
    bits.skip(1)?;
    let dont_fragment = bits.read_bool()?;
    let more_fragments = bits.read_bool()?;
    let fragment_offset = field(bits.read_bits(13)?, 13);
    let ttl = bits.read_u8()?;
    let protocol = bits.read_u8()?;
    let checksum = bits.read_hex_string(16)?;

    // Addresses are read positionally to show the other half of the API
    let source = data.read_u32(97)?.to_be_bytes();
    let destination = data.read_u32(129)?.to_be_bytes();

    Ok(Ipv4Header {
        version,
        ihl,
        dscp,
        ecn,
        total_length,
        identification,
        dont_fragment,
        more_fragments,
        fragment_offset,
        ttl,
        protocol,
        checksum,
        source,
        destination,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut data = Vec::new();
    stdin.lock().read_to_end(&mut data)?;
    if data.is_empty() {
        data.extend_from_slice(&SAMPLE);
    }

    println!("{:#?}", read_data(&data)?);
    Ok(())
}
