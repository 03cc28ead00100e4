#![no_main]
use libfuzzer_sys::fuzz_target;
use zenplanar::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding must reproduce the consumed bytes
    let Ok(decoded) = decode_bm::<FallbackBitmap>(data) else {
        return;
    };

    let reencoded = encode_bm(&decoded);
    assert_eq!(&data[..reencoded.len()], &reencoded[..], "roundtrip byte mismatch");

    let chunky = to_chunky(&decoded);
    assert_eq!(
        chunky.len(),
        usize::from(decoded.width()) * usize::from(decoded.height())
    );
    let palette = Palette::grayscale(decoded.depth());
    assert!(encode_bmp(&decoded, &palette).is_ok());
});
