mod city;
mod partner_unit;
mod state;
