use base36::{Base36, STD};

fn main() {
    let reversed = Base36::new("zyxwvutsrqponmlkjihgfedcba9876543210");

    for n in 1..11 {
        let encoded = STD.encode(n);
        let decoded = STD.decode(&encoded).unwrap();
        println!("{} -> {} -> {} ({})", n, encoded, decoded, reversed.encode(n));
    }
}
