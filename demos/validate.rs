use cadastro::labels::label;
use cadastro::*;

fn main() {
    // Default validator: classification by raw input length
    println!("=== Tax ID Validation (raw length) ===\n");

    let inputs = [
        "11144477735",        // valid CPF
        "11144477736",        // CPF, wrong check digit
        "00000000000",        // CPF, repeated digit
        "11222333000181",     // valid CNPJ
        "111.444.777-35",     // formatted CPF, 14 characters
        "11.222.333/0001-81", // formatted CNPJ, 18 characters
        "123",                // too short
    ];

    for raw in &inputs {
        match validate_tax_id(raw) {
            Ok(r) => println!(
                "  {raw:<20} => {} {}",
                label(r.kind),
                if r.valid { "valid" } else { "INVALID" }
            ),
            Err(e) => println!("  {raw:<20} => ERROR: {e}"),
        }
    }

    // Digit-count validator: formatting characters ignored
    println!("\n=== Tax ID Validation (digit count) ===\n");

    let validator = Validator::new(ValidatorConfig {
        length_basis: LengthBasis::DigitCount,
        reject_uniform_corporate: true,
    });

    for raw in &inputs {
        match validator.check(raw) {
            TaxIdCheck::Recognized(r) => println!(
                "  {raw:<20} => {} {}",
                label(r.kind),
                if r.valid { "valid" } else { "INVALID" }
            ),
            TaxIdCheck::Unrecognized { length } => {
                println!("  {raw:<20} => unrecognized ({length} digits)")
            }
        }
    }
}
