use super::domain::{ElectricityTariff, FinancingOption, FuelOption, ModelSpec, Rupiah, Variant};

pub(crate) const DEFAULT_MODEL_ID: &str = "edpower";

/// Flat purchase subsidy deducted from OTR when estimating payback.
pub(crate) const PURCHASE_SUBSIDY: Rupiah = 7_000_000;

pub(crate) const TENORS: [u32; 5] = [12, 18, 24, 30, 36];

pub(crate) fn standard_models() -> Vec<ModelSpec> {
    vec![
        ModelSpec {
            id: "edpower",
            name: "EdPower",
            battery_ah: 70.0,
            voltage_v: 48.0,
            range_km: 135.0,
            price: 32_500_000,
            extended_id: Some("edpower-ext"),
            base_id: None,
        },
        ModelSpec {
            id: "edpower-ext",
            name: "EdPower Extended",
            battery_ah: 96.0,
            voltage_v: 48.0,
            range_km: 185.0,
            price: 36_900_000,
            extended_id: None,
            base_id: Some("edpower"),
        },
        ModelSpec {
            id: "mini",
            name: "MINI",
            battery_ah: 30.0,
            voltage_v: 48.0,
            range_km: 65.0,
            price: 21_500_000,
            extended_id: None,
            base_id: None,
        },
        ModelSpec {
            id: "cargo",
            name: "Cargo",
            battery_ah: 60.0,
            voltage_v: 60.0,
            range_km: 110.0,
            price: 29_900_000,
            extended_id: None,
            base_id: None,
        },
    ]
}

pub(crate) fn standard_fuels() -> Vec<FuelOption> {
    vec![
        FuelOption {
            id: "pertalite",
            name: "Pertalite",
            price_per_liter: 10_000,
        },
        FuelOption {
            id: "pertamax",
            name: "Pertamax",
            price_per_liter: 12_500,
        },
    ]
}

pub(crate) fn standard_tariff() -> ElectricityTariff {
    ElectricityTariff {
        label: "R-1 household 1300-2200 VA",
        price_per_kwh: 1_445,
    }
}

pub(crate) fn standard_financing() -> Vec<FinancingOption> {
    vec![
        FinancingOption::from_rows(
            "edpower",
            Some(Variant::Regular),
            32_500_000,
            1_500_000,
            &[3_500_000, 5_000_000, 7_500_000, 10_000_000],
            &[
                (12, &[2_910_000, 2_759_000, 2_508_000, 2_258_000]),
                (18, &[2_104_000, 1_995_000, 1_814_000, 1_632_000]),
                (24, &[1_701_000, 1_613_000, 1_467_000, 1_320_000]),
                (30, &[1_460_000, 1_384_000, 1_258_000, 1_132_000]),
                (36, &[1_299_000, 1_231_000, 1_119_000, 1_008_000]),
            ],
        ),
        FinancingOption::from_rows(
            "edpower-ext",
            Some(Variant::Extended),
            36_900_000,
            1_500_000,
            &[4_000_000, 6_000_000, 8_500_000, 11_000_000],
            &[
                (12, &[3_301_000, 3_100_000, 2_849_000, 2_599_000]),
                (18, &[2_387_000, 2_242_000, 2_061_000, 1_879_000]),
                (24, &[1_930_000, 1_813_000, 1_666_000, 1_519_000]),
                (30, &[1_656_000, 1_555_000, 1_429_000, 1_304_000]),
                (36, &[1_473_000, 1_384_000, 1_272_000, 1_160_000]),
            ],
        ),
        FinancingOption::from_rows(
            "mini",
            None,
            21_500_000,
            1_000_000,
            &[3_200_000, 4_500_000, 6_000_000],
            &[
                (12, &[1_836_000, 1_706_000, 1_555_000]),
                (18, &[1_328_000, 1_233_000, 1_125_000]),
                (24, &[1_074_000, 997_000, 909_000]),
                (30, &[921_000, 856_000, 780_000]),
                (36, &[819_000, 761_000, 694_000]),
            ],
        ),
        FinancingOption::from_rows(
            "cargo",
            None,
            29_900_000,
            0,
            &[4_000_000, 6_000_000, 8_000_000],
            &[
                (12, &[2_599_000, 2_398_000, 2_197_000]),
                (18, &[1_879_000, 1_734_000, 1_589_000]),
                (24, &[1_519_000, 1_402_000, 1_285_000]),
                (30, &[1_304_000, 1_203_000, 1_102_000]),
                (36, &[1_160_000, 1_070_000, 981_000]),
            ],
        ),
    ]
}
