#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Planar 8x2, 2 planes
    let planar = b"\x00\x08\x00\x02\x02\x00\xaa\x55\x0f\xf0";
    fs::write(format!("{dir}/planar_8x2x2.bm"), planar).unwrap();

    // Interleaved 16x1, 3 planes
    let interleaved = b"\x00\x10\x00\x01\x03\x01\x01\x02\x03\x04\x05\x06";
    fs::write(format!("{dir}/interleaved_16x1x3.bm"), interleaved).unwrap();

    // Odd width 5x3, 1 plane, displayable
    let odd = b"\x00\x05\x00\x03\x01\x08\xf8\x88\xf8";
    fs::write(format!("{dir}/odd_5x3x1.bm"), odd).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/header_only.bin"), b"\x00\x08\x00\x08\x01\x00").unwrap();
    fs::write(format!("{dir}/mask_flag.bin"), b"\x00\x08\x00\x01\x01\x02\xff").unwrap();
    fs::write(format!("{dir}/depth_nine.bin"), b"\x00\x08\x00\x01\x09\x00").unwrap();

    println!("Generated seed corpus in {dir}/");
}
