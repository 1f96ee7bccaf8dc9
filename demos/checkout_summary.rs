use cadastro::core::validate_fiscal_id;
use cadastro::locale::*;
use chrono::{Duration, NaiveDate};
use rust_decimal_macros::dec;

fn main() {
    let plans = [
        ("MENSAL", dec!(29.90), 30),
        ("TRIMESTRAL", dec!(79.90), 90),
        ("SEMESTRAL", dec!(149.90), 180),
        ("ANUAL", dec!(249.90), 365),
    ];

    let Some(paid_at) = NaiveDate::from_ymd_opt(2024, 6, 15).and_then(|d| d.and_hms_opt(14, 30, 0))
    else {
        return;
    };

    let payer = validate_fiscal_id("111.444.777-35");
    println!("=== Checkout ===\n");
    println!(
        "  payer: {} {}",
        payer.kind,
        payer.canonical().unwrap_or("-")
    );
    println!("  paid:  {}\n", format_date_br(paid_at));

    for (name, price, days) in &plans {
        let expires = paid_at + Duration::days(*days);
        let commission = calculate_commission(*price, DEFAULT_COMMISSION_RATE);
        println!("  {name}:");
        println!(
            "    price={}, expires={}",
            format_brl(*price),
            format_date_br_short(expires.date())
        );
        println!(
            "    remaining={}, affiliate commission={}",
            time_remaining(expires, paid_at),
            format_brl(commission)
        );
    }

    println!("\n  share: {}", affiliate_link("imperium_bot", 123_456_789));
    println!("  minimum withdrawal: {}", format_brl(MIN_WITHDRAWAL));
}
