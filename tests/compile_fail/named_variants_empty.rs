//! NamedVariants needs at least one variant.

#[derive(extkit::variants::NamedVariants)]
enum Never {}

fn main() {
    let _: Option<Never> = None;
}
