mod tables;

pub use self::tables::{
    catalog as print_catalog, comparison as print_comparison, lift as print_lift_tables,
    rental as print_rental_tables,
};
