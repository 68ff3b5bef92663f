//! Static unit definitions, one table per category
//!
//! Linear factors convert one unit into the category's base unit.

use super::{Conversion, UnitDef};

const fn linear(key: &'static str, name: &'static str, factor: f64) -> UnitDef {
    UnitDef {
        key,
        name,
        conversion: Conversion::Linear(factor),
    }
}

const fn affine(
    key: &'static str,
    name: &'static str,
    to_base: fn(f64) -> f64,
    from_base: fn(f64) -> f64,
) -> UnitDef {
    UnitDef {
        key,
        name,
        conversion: Conversion::Affine { to_base, from_base },
    }
}

// Temperature, base unit Celsius

fn identity(x: f64) -> f64 {
    x
}

fn fahrenheit_to_celsius(x: f64) -> f64 {
    (x - 32.0) * 5.0 / 9.0
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn kelvin_to_celsius(x: f64) -> f64 {
    x - 273.15
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}

fn rankine_to_celsius(x: f64) -> f64 {
    (x - 491.67) * 5.0 / 9.0
}

fn celsius_to_rankine(c: f64) -> f64 {
    c * 9.0 / 5.0 + 491.67
}

pub static LENGTH: [UnitDef; 12] = [
    linear("mm", "Millimeter", 0.001),
    linear("cm", "Centimeter", 0.01),
    linear("dm", "Decimeter", 0.1),
    linear("m", "Meter", 1.0),
    linear("dam", "Decameter", 10.0),
    linear("hm", "Hectometer", 100.0),
    linear("km", "Kilometer", 1000.0),
    linear("in", "Inch", 0.0254),
    linear("ft", "Foot", 0.3048),
    linear("yd", "Yard", 0.9144),
    linear("mi", "Mile", 1609.344),
    linear("nmi", "Nautical Mile", 1852.0),
];

pub static WEIGHT: [UnitDef; 8] = [
    linear("mg", "Milligram", 0.000001),
    linear("g", "Gram", 0.001),
    linear("kg", "Kilogram", 1.0),
    linear("t", "Tonne", 1000.0),
    linear("oz", "Ounce", 0.0283495),
    linear("lb", "Pound", 0.453592),
    linear("st", "Stone", 6.35029),
    linear("arroba", "Arroba", 15.0),
];

pub static TEMPERATURE: [UnitDef; 4] = [
    affine("c", "Celsius", identity, identity),
    affine("f", "Fahrenheit", fahrenheit_to_celsius, celsius_to_fahrenheit),
    affine("k", "Kelvin", kelvin_to_celsius, celsius_to_kelvin),
    affine("r", "Rankine", rankine_to_celsius, celsius_to_rankine),
];

pub static VOLUME: [UnitDef; 16] = [
    linear("ml", "Milliliter", 0.001),
    linear("cl", "Centiliter", 0.01),
    linear("dl", "Deciliter", 0.1),
    linear("l", "Liter", 1.0),
    linear("dal", "Decaliter", 10.0),
    linear("hl", "Hectoliter", 100.0),
    linear("kl", "Kiloliter", 1000.0),
    linear("tsp", "Teaspoon", 0.00492892),
    linear("tbsp", "Tablespoon", 0.0147868),
    linear("fl_oz", "Fluid Ounce", 0.0295735),
    linear("cup", "Cup", 0.236588),
    linear("pt", "Pint", 0.473176),
    linear("qt", "Quart", 0.946353),
    linear("gal", "Gallon", 3.78541),
    linear("cm3", "Cubic Centimeter", 0.001),
    linear("m3", "Cubic Meter", 1000.0),
];

pub static AREA: [UnitDef; 13] = [
    linear("mm2", "Square Millimeter", 0.000001),
    linear("cm2", "Square Centimeter", 0.0001),
    linear("m2", "Square Meter", 1.0),
    linear("dam2", "Square Decameter", 100.0),
    linear("hm2", "Square Hectometer", 10000.0),
    linear("km2", "Square Kilometer", 1000000.0),
    linear("ha", "Hectare", 10000.0),
    linear("a", "Are", 100.0),
    linear("in2", "Square Inch", 0.00064516),
    linear("ft2", "Square Foot", 0.092903),
    linear("yd2", "Square Yard", 0.836127),
    linear("ac", "Acre", 4046.86),
    linear("mi2", "Square Mile", 2589988.11),
];

pub static SPEED: [UnitDef; 5] = [
    linear("m/s", "Meter per Second", 1.0),
    linear("km/h", "Kilometer per Hour", 0.277778),
    linear("mph", "Mile per Hour", 0.44704),
    linear("ft/s", "Foot per Second", 0.3048),
    linear("knot", "Knot", 0.514444),
];

pub static ENERGY: [UnitDef; 7] = [
    linear("j", "Joule", 1.0),
    linear("kj", "Kilojoule", 1000.0),
    linear("cal", "Calorie", 4.184),
    linear("kcal", "Kilocalorie", 4184.0),
    linear("wh", "Watt-hour", 3600.0),
    linear("kwh", "Kilowatt-hour", 3600000.0),
    linear("btu", "BTU", 1055.06),
];

pub static POWER: [UnitDef; 5] = [
    linear("w", "Watt", 1.0),
    linear("kw", "Kilowatt", 1000.0),
    linear("mw", "Megawatt", 1000000.0),
    linear("hp", "Horsepower", 745.7),
    linear("cv", "Metric Horsepower", 735.5),
];
