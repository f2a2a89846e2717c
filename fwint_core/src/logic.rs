mod mul;
mod radix;
mod sum;
