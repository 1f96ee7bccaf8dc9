use cadastro::core::*;

fn main() {
    // Facade: classification plus canonical form
    println!("=== Fiscal ID Validation ===\n");

    let inputs = [
        "111.444.777-35",
        "74682489070",
        "11.222.333/0001-81",
        "00000000000", // repeated digits
        "12345678900", // wrong check digits
        "1234567890123", // neither 11 nor 14 digits
    ];

    for input in &inputs {
        let result = validate_fiscal_id(input);
        match result.canonical() {
            Some(canonical) => println!("  {input} => {} {canonical}", result.kind),
            None => println!("  {input} => INVALID"),
        }
    }

    // Typed parsers keep the rejection reason
    println!("\n=== Rejection Reasons ===\n");

    for input in &inputs {
        match FiscalId::parse(input) {
            Ok(id) => println!("  {input} => ok ({})", id.kind()),
            Err(e) => println!("  {input} => {e}"),
        }
    }

    // Generating check digits
    println!("\n=== Check Digit Generation ===\n");

    match Cnpj::from_base("11.222.333/0002") {
        Ok(branch) => println!(
            "  branch {} of {} => {branch} (head office: {})",
            branch.branch(),
            branch.root(),
            branch.is_head_office()
        ),
        Err(e) => println!("  failed: {e}"),
    }
}
