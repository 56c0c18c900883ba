use bitreader::BitReader as BR;
use bitspan::{BitAccess, BitCursor};
use bitstream_io::{BigEndian, BitRead, BitReader as bio_br};
use bitter::{BigEndianReader, BitReader};
use bitvec::{field::BitField, order::Msb0, view::BitView};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Cursor;

static DATA: [u8; 0x10_000] = [0; 0x10_000];

const ITER: u64 = 1000;

// Every reader decodes MSB-first after skipping a single bit so that no read
// is byte aligned.
fn bitting(c: &mut Criterion) {
    let parameters: Vec<u32> = (1..65).collect();

    let mut group = c.benchmark_group("bit-reading");
    for i in parameters {
        group.throughput(Throughput::Bytes((i as u64 * ITER) / 8));

        group.bench_with_input(BenchmarkId::new("bitspan-cursor", i), &i, |b, param| {
            b.iter(|| {
                let mut cursor = BitCursor::new(&DATA[..]);
                cursor.skip(1).unwrap();
                for _ in 0..ITER {
                    black_box(cursor.read_bits(*param as usize).unwrap());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("bitspan-positional", i), &i, |b, param| {
            b.iter(|| {
                let mut pos = 2;
                for _ in 0..ITER {
                    black_box(DATA.sub_bits(pos, *param as usize).unwrap());
                    pos += *param as usize;
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("bitter", i), &i, |b, param| {
            b.iter(|| {
                let mut bits = BigEndianReader::new(&DATA[..]);
                bits.read_bit();
                if *param <= bitter::MAX_READ_BITS {
                    for _ in 0..ITER {
                        black_box(bits.read_bits(*param));
                    }
                } else {
                    for _ in 0..ITER {
                        let hi_bits = *param - bitter::MAX_READ_BITS;
                        let hi = bits.read_bits(hi_bits).unwrap();
                        let lo = bits.read_bits(bitter::MAX_READ_BITS).unwrap();
                        black_box((hi << bitter::MAX_READ_BITS) + lo);
                    }
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("bitreader", i), &i, |b, param| {
            b.iter(|| {
                let mut bits = BR::new(&DATA);
                bits.read_u32(1).unwrap();
                for _ in 0..ITER {
                    black_box(bits.read_u64(*param as u8).unwrap());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("bitstream-io", i), &i, |b, param| {
            b.iter(|| {
                let mut cursor = Cursor::new(&DATA[..]);
                {
                    let mut bits = bio_br::endian(&mut cursor, BigEndian);
                    bits.read_bit().unwrap();
                    for _ in 0..ITER {
                        black_box(bits.read_var::<u64>(*param).unwrap());
                    }
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("bitvec", i), &i, |b, param| {
            b.iter(|| {
                let mut bits = DATA.view_bits::<Msb0>();
                bits = &bits[1..];
                for _ in 0..ITER {
                    let (curr, next) = bits.split_at(*param as usize);
                    black_box(curr.load_be::<u64>());
                    bits = next;
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bitting,);

criterion_main!(benches);
