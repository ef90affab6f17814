//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities mirror the hosted schema's tables and foreign keys.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod attendance;
pub mod client;
pub mod enquiry;
pub mod enums;
pub mod fee;
pub mod membership;
pub mod profile;
pub mod pt_client;
pub mod salary;
pub mod staff;

pub use enums::{EnquiryStatus, MembershipStatus, PaymentStatus, UserRole};

// Re-export specific types to avoid conflicts
pub use attendance::{Column as AttendanceColumn, Entity as Attendance, Model as AttendanceModel};
pub use client::{Column as ClientColumn, Entity as Client, Model as ClientModel};
pub use enquiry::{Column as EnquiryColumn, Entity as Enquiry, Model as EnquiryModel};
pub use fee::{Column as FeeColumn, Entity as Fee, Model as FeeModel};
pub use membership::{Column as MembershipColumn, Entity as Membership, Model as MembershipModel};
pub use profile::{Column as ProfileColumn, Entity as Profile, Model as ProfileModel};
pub use pt_client::{Column as PtClientColumn, Entity as PtClient, Model as PtClientModel};
pub use salary::{Column as SalaryColumn, Entity as Salary, Model as SalaryModel};
pub use staff::{Column as StaffColumn, Entity as Staff, Model as StaffModel};
