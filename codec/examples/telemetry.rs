//! Persist a telemetry record to disk and read it back, peeking the header
//! before committing to a full decode.
//!
//! ```sh
//! cargo run --example telemetry
//! ```

use ferrule_codec::{
    envelope, serialize_record, BitArray, Decode, Encode, Endian, Error, ReadBuffer, Record,
    WriteBuffer,
};
use std::collections::BTreeMap;

#[repr(u16)]
enum RecordKind {
    Telemetry = 1,
}

#[derive(Debug, PartialEq)]
struct Telemetry {
    device: String,
    uptime_s: u64,
    cpu_load: f32,
    sensors: BTreeMap<String, f64>,
    faults: BitArray<16>,
    last_error: Option<String>,
}

impl Record for Telemetry {
    const ID: u16 = RecordKind::Telemetry as u16;
    const VERSION: u8 = 1;

    fn write_body(&self, writer: &mut WriteBuffer) -> Result<(), Error> {
        self.device.write(writer)?;
        writer.write_u64(self.uptime_s)?;
        writer.write_f32(self.cpu_load)?;
        self.sensors.write(writer)?;
        self.faults.write(writer)?;
        self.last_error.write(writer)
    }

    fn read_body(reader: &mut ReadBuffer) -> Result<Self, Error> {
        Ok(Self {
            device: String::read(reader)?,
            uptime_s: reader.read_u64()?,
            cpu_load: reader.read_f32()?,
            sensors: BTreeMap::read(reader)?,
            faults: BitArray::read(reader)?,
            last_error: Option::read(reader)?,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut faults = BitArray::new();
    faults.set(3, true);
    let record = Telemetry {
        device: "probe-7".into(),
        uptime_s: 86_400,
        cpu_load: 0.42,
        sensors: [("temp_c".to_string(), 21.5), ("rh_pct".to_string(), 48.0)]
            .into_iter()
            .collect(),
        faults,
        last_error: None,
    };

    // Serialize and hand the bytes to any sink; a temp file stands in here.
    let bytes = serialize_record(&record, Endian::Little)?;
    let path = std::env::temp_dir().join("telemetry.bin");
    std::fs::write(&path, &bytes)?;
    println!("wrote {} bytes to {}", bytes.len(), path.display());

    // Re-open, peek the header, then decode the body.
    let mut reader = ReadBuffer::from_file(&path, Endian::Little)?;
    let header = envelope::read_header(&mut reader)?;
    println!("{header}");

    reader.seek_start();
    let decoded: Telemetry = envelope::read_record(&mut reader)?;
    assert_eq!(decoded, record);
    println!("decoded {:?}", decoded.device);

    std::fs::remove_file(&path)?;
    Ok(())
}
