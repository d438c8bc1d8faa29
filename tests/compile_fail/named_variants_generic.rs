//! NamedVariants rejects generic enums.

#[derive(extkit::variants::NamedVariants)]
enum Tagged<T> {
    Plain,
    Marked(T),
}

fn main() {
    for tagged in [Tagged::Plain, Tagged::Marked(1_u8)] {
        if let Tagged::Marked(value) = tagged {
            let _ = value;
        }
    }
}
