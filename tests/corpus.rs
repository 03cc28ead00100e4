//! Behavioural checks across sizes, depths and both plane layouts.

use std::path::PathBuf;

use zenplanar::*;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("zenplanar-corpus-{}-{name}", std::process::id()))
}

fn checkerboard(bm: &mut FallbackBitmap) {
    let colors = 1u16 << bm.depth();
    for y in 0..bm.height() {
        for x in 0..bm.width() {
            let index = if (x + y) % 2 == 0 { colors - 1 } else { (x + 3 * y) % colors };
            bm.set_pixel(x, y, index as u8);
        }
    }
}

const WIDTHS: [u16; 8] = [1, 7, 8, 9, 16, 63, 320, 641];

// ── Geometry ────────────────────────────────────────────────────────

#[test]
fn byte_width_ignores_layout() {
    for depth in 1..=8u8 {
        for width in WIDTHS {
            let expected = width.div_ceil(8);
            let planar = create(width, 3, depth, BitmapFlags::empty()).unwrap();
            let interleaved = create(width, 3, depth, BitmapFlags::INTERLEAVED).unwrap();
            assert_eq!(byte_width(&planar), expected);
            assert_eq!(byte_width(&interleaved), expected);
            assert_eq!(planar.bytes_per_row(), expected);
            assert_eq!(interleaved.bytes_per_row(), expected * u16::from(depth));
        }
    }
}

#[test]
fn is_interleaved_matches_creation_flags() {
    for raw in 0..=BitmapFlags::all().bits() {
        let flags = BitmapFlags::from_bits_truncate(raw);
        let bm = create(16, 16, 2, flags).unwrap();
        assert_eq!(is_interleaved(&bm), flags.contains(BitmapFlags::INTERLEAVED));
        assert_eq!(bm.flags(), flags);
    }
}

#[test]
fn widest_bitmaps_roundtrip_and_export() {
    for width in [65_529u16, u16::MAX] {
        let mut fallback = FallbackBitmap::create(width, 2, 1, BitmapFlags::empty()).unwrap();
        let mut host = HostBitMap::create(width, 2, 1, BitmapFlags::INTERLEAVED).unwrap();
        assert_eq!(fallback.width(), width);
        assert_eq!(host.width(), u16::MAX);
        assert_eq!(byte_width(&host), 8192);

        fallback.set_pixel(width - 1, 1, 1);
        host.set_pixel(u16::MAX - 1, 1, 1);

        let decoded: FallbackBitmap = decode_bm(&encode_bm(&fallback)).unwrap();
        assert_eq!(decoded, fallback);
        let decoded: HostBitMap = decode_bm(&encode_bm(&host)).unwrap();
        assert_eq!(decoded, host);

        let chunky = to_chunky(&host);
        assert_eq!(chunky.len(), usize::from(u16::MAX) * 2);
        assert_eq!(chunky[chunky.len() - 1], 1);
        assert_eq!(to_chunky(&fallback).len(), usize::from(width) * 2);

        let palette = Palette::grayscale(1);
        assert!(encode_bmp(&fallback, &palette).is_ok());
        assert!(encode_bmp(&host, &palette).is_ok());
    }
}

#[test]
fn widest_file_decodes_as_host() {
    let mut data = vec![0xFF, 0xFF, 0, 1, 1, 0];
    data.resize(BmHeader::SIZE + 8192, 0);
    let host: HostBitMap = decode_bm(&data).unwrap();
    assert_eq!(host.width(), u16::MAX);
    assert_eq!(encode_bm(&host), data);
}

#[test]
fn interleaved_row_over_64k_is_rejected() {
    let err = create(u16::MAX, 1, 8, BitmapFlags::INTERLEAVED).unwrap_err();
    assert!(matches!(err, BitmapError::RowTooWide { width: u16::MAX, depth: 8 }));
    assert_eq!(err.kind(), ErrorKind::Usage);
    assert!(create(u16::MAX, 1, 8, BitmapFlags::empty()).is_ok());
}

// ── Layout equivalence ──────────────────────────────────────────────

#[test]
fn layouts_export_identically() {
    for depth in [1u8, 3, 5, 8] {
        for width in [9u16, 32, 41] {
            let mut planar = FallbackBitmap::create(width, 11, depth, BitmapFlags::empty()).unwrap();
            let mut interleaved =
                FallbackBitmap::create(width, 11, depth, BitmapFlags::INTERLEAVED).unwrap();
            checkerboard(&mut planar);
            checkerboard(&mut interleaved);
            let palette = Palette::grayscale(depth);
            assert_eq!(to_chunky(&planar), to_chunky(&interleaved));
            assert_eq!(
                encode_bmp(&planar, &palette).unwrap(),
                encode_bmp(&interleaved, &palette).unwrap()
            );
        }
    }
}

// ── Partial load ────────────────────────────────────────────────────

#[test]
fn partial_load_fills_right_half_only() {
    let mut tile = FallbackBitmap::create(32, 32, 1, BitmapFlags::empty()).unwrap();
    let mut state: u32 = 0x1234_5678;
    for y in 0..32 {
        for byte in tile.plane_row_mut(0, y) {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            *byte = state as u8;
        }
    }
    let path = temp_path("tile.bm");
    save(&tile, &path).unwrap();

    let mut atlas = FallbackBitmap::create(64, 64, 1, BitmapFlags::CLEAR).unwrap();
    load(&mut atlas, &path, 32, 0).unwrap();
    std::fs::remove_file(&path).ok();

    for y in 0..64u16 {
        let row = atlas.plane_row(0, y);
        assert_eq!(&row[..4], &[0; 4], "left half of row {y}");
        if y < 32 {
            assert_eq!(&row[4..], tile.plane_row(0, y), "right half of row {y}");
        } else {
            assert_eq!(&row[4..], &[0; 4], "right half of row {y}");
        }
    }
}

#[test]
fn atlas_from_several_tiles() {
    let mut atlas = FallbackBitmap::create(32, 16, 2, BitmapFlags::INTERLEAVED).unwrap();
    for (i, (x, y)) in [(0u16, 0u16), (16, 0), (0, 8), (16, 8)].into_iter().enumerate() {
        let mut tile = FallbackBitmap::create(16, 8, 2, BitmapFlags::empty()).unwrap();
        for ty in 0..8 {
            for tx in 0..16 {
                tile.set_pixel(tx, ty, i as u8);
            }
        }
        decode_bm_into(&mut atlas, &encode_bm(&tile), x, y).unwrap();
    }
    assert_eq!(atlas.pixel(3, 3), 0);
    assert_eq!(atlas.pixel(20, 3), 1);
    assert_eq!(atlas.pixel(3, 12), 2);
    assert_eq!(atlas.pixel(31, 15), 3);
}

// ── Export ──────────────────────────────────────────────────────────

#[test]
fn two_by_two_export() {
    let mut bm = FallbackBitmap::create(2, 2, 1, BitmapFlags::CLEAR).unwrap();
    bm.set_pixel(1, 0, 1);
    bm.set_pixel(0, 1, 1);
    assert_eq!(to_chunky(&bm), [0, 1, 1, 0]);

    let palette = Palette::new(vec![RGB8::new(0, 0, 0), RGB8::new(255, 255, 255)]);
    let out = encode_bmp(&bm, &palette).unwrap();
    let data_offset = u32::from_le_bytes([out[10], out[11], out[12], out[13]]) as usize;
    assert_eq!(data_offset, 14 + 40 + 2 * 4);
    // Bottom-up rows, each padded to 4 bytes.
    assert_eq!(&out[data_offset..], &[1, 0, 0, 0, 0, 1, 0, 0]);
}

#[test]
fn export_needs_full_palette() {
    let bm = FallbackBitmap::create(8, 8, 4, BitmapFlags::empty()).unwrap();
    let err = encode_bmp(&bm, &Palette::grayscale(3)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
    assert!(encode_bmp(&bm, &Palette::grayscale(8)).is_ok());
}

#[test]
fn rgb12_palette_lands_in_colour_table() {
    let bm = FallbackBitmap::create(4, 1, 1, BitmapFlags::empty()).unwrap();
    let out = encode_bmp(&bm, &Palette::from_rgb12(&[0x0F00, 0x00F0])).unwrap();
    assert_eq!(&out[54..62], &[0x00, 0x00, 0xFF, 0, 0x00, 0xFF, 0x00, 0]);
}

// ── Allocation ──────────────────────────────────────────────────────

#[test]
fn allocation_over_limit_fails_cleanly() {
    let limits = Limits {
        max_memory_bytes: Some(4096),
        ..Default::default()
    };
    for flags in [BitmapFlags::empty(), BitmapFlags::INTERLEAVED] {
        // 8 bytes * 128 rows * 5 planes = 5120
        let err = create_in::<FallbackBitmap>(64, 128, 5, flags, &limits).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Allocation);
        // 8 bytes * 128 rows * 4 planes = 4096
        let bm = create_in::<FallbackBitmap>(64, 128, 4, flags, &limits).unwrap();
        assert_eq!(bm.planes().count(), 4);
    }
}

#[test]
fn dump_never_fails() {
    let _ = env_logger::builder().is_test(true).try_init();
    for flags in [BitmapFlags::empty(), BitmapFlags::INTERLEAVED | BitmapFlags::DISPLAYABLE] {
        let bm = create(320, 256, 5, flags).unwrap();
        dump(&bm);
        destroy(bm);
    }
    let host = HostBitMap::create(16, 16, 2, BitmapFlags::INTERLEAVED).unwrap();
    dump(&host);
}
