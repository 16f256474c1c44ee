#[macro_use]
extern crate hex_literal;
extern crate digest;
extern crate tiger_hash;

use digest::dev::one_million_a;
use digest::{Input, VariableOutput};
use tiger_hash::{Digest, Tiger, Tiger128, Tiger160, VarTiger};

// Published Tiger-192 reference vectors, cross-checked against libgcrypt.
#[test]
fn reference_vectors() {
    let cases: &[(&[u8], [u8; 24])] = &[
        (b"", hex!("3293ac630c13f0245f92bbb1766e16167a4e58492dde73f3")),
        (b"a", hex!("77befbef2e7ef8ab2ec8f93bf587a7fc613e247f5f247809")),
        (b"abc", hex!("2aab1484e8c158f2bfb8c5ff41b57a525129131c957b5f93")),
        (b"Tiger", hex!("dd00230799f5009fec6debc838bb6a27df2b9d6f110c7937")),
        (
            b"message digest",
            hex!("d981f8cb78201a950dcf3048751e441c517fca1aa55a29f6"),
        ),
        (
            b"abcdefghijklmnopqrstuvwxyz",
            hex!("1714a472eee57d30040412bfcc55032a0b11602ff37beee9"),
        ),
        (
            b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
            hex!("0f7bf9a19b9c58f2b7610df7e84f0ac3a71c631e7b53f78e"),
        ),
        (
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
            hex!("8dcea680a17583ee502ba38a3c368651890ffbccdc49a8cc"),
        ),
        (
            b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
            hex!("1c14795529fd9f207a958f84c52f11e887fa0cabdfd91bfd"),
        ),
        (
            b"The quick brown fox jumps over the lazy dog",
            hex!("6d12a41e72e644f017b6f0e2f7b44c6285f06dd5d2c5b075"),
        ),
    ];

    for &(input, ref expected) in cases {
        assert_eq!(Tiger::digest(input)[..], expected[..], "input {:?}", input);
    }
}

// Lengths around the 56 mod 64 padding boundary and the 64-byte block
// boundary, where an off-by-one in the framer would first show up.
#[test]
fn padding_boundary_lengths() {
    let cases: &[(usize, [u8; 24])] = &[
        (55, hex!("083baeba1a02a81f13087c08721a481c45e0e9e4fe2081a7")),
        (56, hex!("74b66aee713d8b296e1570e16233b57690767a810f453b66")),
        (63, hex!("c06bf7daf344afddffb2d72323908aa1924d384bac64ca93")),
        (64, hex!("23609e5ede6caf1c8cf375e4bb90bb8cf6b57d95e66dd12d")),
        (65, hex!("92fd7242ee35214110652ff0b8e8f5c67942280f10590aa2")),
        (119, hex!("5a63e84c911ef15af64711c78a4408ac01e8940b6bf50c5b")),
        (120, hex!("66a652580a9a37a2b136febc460d1ab24c4497bbe3fbbc3f")),
    ];

    for &(len, ref expected) in cases {
        let msg = vec![b'x'; len];
        assert_eq!(Tiger::digest(&msg)[..], expected[..], "length {}", len);
    }
}

#[test]
fn tiger_1million_a() {
    one_million_a::<Tiger>(&hex!("6db0e2729cbead93d715c6a7d36302e9b3cee0d2bc314b41"));
}

#[test]
fn truncated_variants_are_prefixes() {
    let messages: &[&[u8]] = &[
        b"",
        b"abc",
        b"Tiger",
        b"The quick brown fox jumps over the lazy dog",
    ];

    for &msg in messages {
        let full = Tiger::digest(msg);
        assert_eq!(Tiger160::digest(msg)[..], full[..20]);
        assert_eq!(Tiger128::digest(msg)[..], full[..16]);
    }
}

#[test]
fn variable_output_matches_fixed() {
    for &size in &[16usize, 20, 24] {
        let mut hasher = VarTiger::new(size).unwrap();
        hasher.input(b"abc");
        assert_eq!(hasher.output_size(), size);
        hasher.variable_result(|digest| {
            assert_eq!(digest, &Tiger::digest(b"abc")[..size]);
        });
    }
}

#[test]
fn variable_output_rejects_other_sizes() {
    for &size in &[0usize, 8, 12, 15, 17, 23, 25, 32] {
        assert!(VarTiger::new(size).is_err(), "size {}", size);
    }
}

#[test]
fn chunked_input_matches_one_shot() {
    let msg: Vec<u8> = (0..200).map(|i| (i as u8).wrapping_mul(31)).collect();
    let expected = Tiger::digest(&msg);

    for &chunk in &[1usize, 3, 7, 19, 64, 100] {
        let mut hasher = Tiger::new();
        for part in msg.chunks(chunk) {
            Input::input(&mut hasher, part);
        }
        assert_eq!(hasher.result(), expected, "chunk size {}", chunk);
    }
}

#[test]
fn repeated_hashing_is_deterministic() {
    let first = Tiger::digest(b"determinism");
    for _ in 0..8 {
        assert_eq!(Tiger::digest(b"determinism"), first);
    }
}

// Statistical sanity check, not an exact property: a single flipped
// input bit should change roughly half of the 192 output bits.
#[test]
fn single_bit_flip_avalanches() {
    fn hamming(a: &[u8], b: &[u8]) -> u32 {
        a.iter().zip(b.iter()).map(|(x, y)| (x ^ y).count_ones()).sum()
    }

    let messages: &[&[u8]] = &[
        b"abc",
        b"hello world",
        b"The quick brown fox jumps over the lazy dog",
    ];

    for &msg in messages {
        let base = Tiger::digest(msg);
        for &(pos, bit) in &[(0, 0u8), (msg.len() / 2, 3), (msg.len() - 1, 7)] {
            let mut flipped = msg.to_vec();
            flipped[pos] ^= 1 << bit;
            let distance = hamming(&base, &Tiger::digest(&flipped));
            assert!(
                distance >= 64 && distance <= 128,
                "bit {} of byte {} in {:?} flipped only {} output bits",
                bit,
                pos,
                msg,
                distance
            );
        }
    }
}

#[cfg(feature = "std")]
#[test]
fn one_shot_helpers() {
    let full = tiger_hash::hash(b"abc", 192).unwrap();
    assert_eq!(full[..], hex!("2aab1484e8c158f2bfb8c5ff41b57a525129131c957b5f93")[..]);
    assert_eq!(tiger_hash::hash(b"abc", 160).unwrap()[..], full[..20]);
    assert_eq!(tiger_hash::hash(b"abc", 128).unwrap()[..], full[..16]);

    assert_eq!(
        tiger_hash::hash_hex(b"", 192).unwrap(),
        "3293ac630c13f0245f92bbb1766e16167a4e58492dde73f3"
    );
    assert_eq!(
        tiger_hash::hash_hex(b"abc", 128).unwrap(),
        "2aab1484e8c158f2bfb8c5ff41b57a52"
    );

    assert!(tiger_hash::hash(b"abc", 96).is_err());
    assert!(tiger_hash::hash(b"abc", 193).is_err());
    assert!(tiger_hash::hash_hex(b"abc", 224).is_err());
}

#[cfg(feature = "std")]
#[test]
fn io_write_adapter() {
    use std::io::Write;

    let mut hasher = Tiger::new();
    hasher.write_all(b"abc").unwrap();
    hasher.flush().unwrap();
    assert_eq!(
        hasher.result()[..],
        hex!("2aab1484e8c158f2bfb8c5ff41b57a525129131c957b5f93")[..]
    );
}
