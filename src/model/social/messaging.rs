//! Direct messages and synced contacts

use crate::data;

use super::types::{ChatParticipant, Contact, Conversation, Message, MessageKind};

/// A read text message from `sender_id`
pub fn text_message(conversation_id: &str, sender_id: &str, content: &str) -> Message {
    Message {
        id: data::generate_id("msg"),
        conversation_id: conversation_id.to_string(),
        sender_id: sender_id.to_string(),
        kind: MessageKind::Text,
        content: content.to_string(),
        media_url: None,
        song_info: None,
        reply_to: None,
        is_read: true,
        created_at: data::now_iso(),
    }
}

/// One-to-one chat with `contact`, opened by `me` with a wave
pub fn direct_conversation(contact: &Contact, me: ChatParticipant) -> Conversation {
    let id = data::generate_id("conv");
    let mut greeting = text_message(&id, &me.id, "👋");
    greeting.kind = MessageKind::Reaction;
    Conversation {
        participants: vec![
            ChatParticipant {
                id: contact.id.clone(),
                name: contact.name.clone(),
                avatar: contact.avatar.clone(),
                is_online: false,
                last_seen: None,
            },
            me,
        ],
        created_at: greeting.created_at.clone(),
        last_message: greeting,
        id,
        unread_count: 0,
        is_group: false,
        group_name: None,
        group_avatar: None,
    }
}

#[derive(Clone, Debug, Default)]
pub struct MessagingStore {
    conversations: Vec<Conversation>,
    contacts: Vec<Contact>,
    active_conversation: Option<String>,
    pub is_syncing: bool,
}

impl MessagingStore {
    pub fn new(conversations: Vec<Conversation>, contacts: Vec<Contact>) -> Self {
        Self {
            conversations,
            contacts,
            active_conversation: None,
            is_syncing: false,
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// A one-to-one conversation already held with `contact`
    pub fn conversation_with(&self, contact: &Contact) -> Option<&Conversation> {
        self.conversations
            .iter()
            .filter(|c| !c.is_group)
            .find(|c| c.participants.iter().any(|p| p.id == contact.id || p.name == contact.name))
    }

    pub fn active_conversation(&self) -> Option<&Conversation> {
        let id = self.active_conversation.as_deref()?;
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn set_active_conversation(&mut self, id: Option<String>) {
        self.active_conversation = id;
    }

    pub fn add_conversation(&mut self, conversation: Conversation) {
        self.conversations.insert(0, conversation);
    }

    /// Becomes the conversation's last message and counts as unread
    pub fn add_message(&mut self, conversation_id: &str, message: Message) {
        if let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == conversation_id) {
            conversation.last_message = message;
            conversation.unread_count += 1;
        }
    }

    pub fn mark_as_read(&mut self, conversation_id: &str) {
        if let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == conversation_id) {
            conversation.unread_count = 0;
        }
    }

    pub fn unread_total(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread_count).sum()
    }

    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    pub fn begin_sync(&mut self) {
        self.is_syncing = true;
    }

    pub fn finish_sync(&mut self) {
        self.is_syncing = false;
        tracing::info!(contacts = self.contacts.len(), "Contacts synced");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::social::{contacts, conversations};

    fn store() -> MessagingStore {
        MessagingStore::new(conversations(), contacts())
    }

    #[test]
    fn new_message_is_last_and_unread() {
        let mut store = store();
        let mut message = store.conversations()[1].last_message.clone();
        message.id = "msg-new".into();
        message.content = "Karibu!".into();
        store.add_message("conv-2", message);

        let conversation = &store.conversations()[1];
        assert_eq!(conversation.last_message.id, "msg-new");
        assert_eq!(conversation.unread_count, 1);
        assert_eq!(store.unread_total(), 3);

        store.mark_as_read("conv-1");
        store.mark_as_read("conv-2");
        assert_eq!(store.unread_total(), 0);
    }

    #[test]
    fn conversations_prepend_and_activate() {
        let mut store = store();
        let mut conversation = store.conversations()[0].clone();
        conversation.id = "conv-new".into();
        store.add_conversation(conversation);
        assert_eq!(store.conversations()[0].id, "conv-new");

        store.set_active_conversation(Some("conv-2".into()));
        assert_eq!(store.active_conversation().map(|c| c.id.as_str()), Some("conv-2"));
        store.set_active_conversation(None);
        assert!(store.active_conversation().is_none());
    }

    #[test]
    fn direct_conversation_puts_contact_first() {
        let mut store = store();
        let contact = store.contacts()[1].clone();
        let me = ChatParticipant {
            id: "user-1".into(),
            name: "Listener".into(),
            avatar: String::new(),
            is_online: true,
            last_seen: None,
        };
        let conversation = direct_conversation(&contact, me);
        assert_eq!(conversation.participants[0].id, contact.id);
        assert_eq!(conversation.last_message.conversation_id, conversation.id);
        assert_eq!(conversation.unread_count, 0);

        store.add_conversation(conversation.clone());
        assert_eq!(store.conversation_with(&contact).map(|c| c.id.clone()), Some(conversation.id));
    }

    #[test]
    fn contacts_append() {
        let mut store = store();
        let mut contact = store.contacts()[0].clone();
        contact.id = "contact-new".into();
        store.add_contact(contact);
        assert_eq!(store.contacts().len(), 4);
        assert_eq!(store.contacts()[3].id, "contact-new");
    }
}
