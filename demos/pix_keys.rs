use cadastro::pix::*;

fn main() {
    println!("=== Pix Key Classification ===\n");

    let keys = [
        "11144477735",
        "11222333000181",
        "Pagamentos@Loja.com",
        "+55 (11) 98765-4321",
        "F47AC10B-58CC-4372-A567-0E02B2C3D479",
        "00000000000", // repeated digits
        "12345",       // nothing recognizable
    ];

    for key in &keys {
        match validate_pix_key(key) {
            Ok(pix) => println!("  {key} => {} {}", pix.key_type, pix.key),
            Err(e) => println!("  {key} => INVALID: {e}"),
        }
    }

    println!("\n=== Phone Numbers ===\n");

    for phone in ["(21) 99876-5432", "2034567890", "11887654321"] {
        match validate_phone(phone) {
            Ok(digits) => println!("  {phone} => {}", format_phone(&digits)),
            Err(e) => println!("  {phone} => INVALID: {e}"),
        }
    }
}
