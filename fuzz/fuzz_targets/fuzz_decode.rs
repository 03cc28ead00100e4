#![no_main]
use libfuzzer_sys::fuzz_target;
use zenplanar::{BitmapFlags, FallbackBitmap, HostBitMap, PlanarBitmap};

fuzz_target!(|data: &[u8]| {
    // Arbitrary .bm bytes must never panic, as a new bitmap or a partial load
    let _ = zenplanar::decode_bm::<FallbackBitmap>(data);
    let _ = zenplanar::decode_bm::<HostBitMap>(data);

    if let Ok(mut atlas) = FallbackBitmap::create(64, 64, 8, BitmapFlags::INTERLEAVED) {
        let x = data.first().map_or(0, |&b| u16::from(b) & !7);
        let y = data.get(1).map_or(0, |&b| u16::from(b));
        let _ = zenplanar::decode_bm_into(&mut atlas, data, x, y);
    }
});
