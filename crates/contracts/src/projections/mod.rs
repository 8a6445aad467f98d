pub mod p900_sales_invoice;
pub mod p901_sales_person_invoice;
