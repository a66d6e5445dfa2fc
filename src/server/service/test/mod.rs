mod geo;
mod partner_unit;
